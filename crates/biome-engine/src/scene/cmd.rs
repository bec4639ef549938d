use crate::scene::shapes::{CircleCmd, LineCmd, PathCmd, RectCmd, TextCmd};

/// Renderer-agnostic draw command stream.
///
/// Adding a primitive means: a payload in `scene::shapes`, a variant here,
/// and a matching arm in `svg::writer`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Line(LineCmd),
    Path(PathCmd),
    Text(TextCmd),
}
