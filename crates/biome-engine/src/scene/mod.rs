//! Retained scene types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - group commands under a shared transform on a sized [`Surface`]

mod cmd;
mod key;
mod list;
mod surface;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{CircleCmd, LineCmd, PathCmd, RectCmd, Stroke, TextAnchor, TextCmd};
pub use surface::{Group, GroupId, Surface};
pub use z_index::ZIndex;
