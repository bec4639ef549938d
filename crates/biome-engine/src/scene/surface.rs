use crate::coords::{Rect, Transform, Viewport};

use super::DrawList;

/// Handle to a group appended to a [`Surface`].
///
/// Handles are invalidated by [`Surface::clear`]; lookups through a stale
/// handle return `None` instead of touching the replacement content.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GroupId {
    generation: u32,
    index: usize,
}

/// Draw commands sharing one transform.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Group {
    pub transform: Transform,
    pub list: DrawList,
}

/// Sized drawing target holding an ordered set of groups.
///
/// This is the retained equivalent of an `<svg>` element: content is owned
/// by whoever renders into it and is replaced wholesale by `clear` + redraw.
#[derive(Debug, Default, Clone)]
pub struct Surface {
    size: Viewport,
    groups: Vec<Group>,
    generation: u32,
}

impl Surface {
    pub fn new(size: Viewport) -> Self {
        Self { size, groups: Vec::new(), generation: 0 }
    }

    #[inline]
    pub fn size(&self) -> Viewport {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }

    pub fn resize(&mut self, size: Viewport) {
        self.size = size;
    }

    /// Removes every group and invalidates outstanding [`GroupId`]s.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Appends an empty group painted above existing ones.
    pub fn append_group(&mut self, transform: Transform) -> GroupId {
        self.groups.push(Group { transform, list: DrawList::new() });
        GroupId { generation: self.generation, index: self.groups.len() - 1 }
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        if id.generation != self.generation {
            return None;
        }
        self.groups.get(id.index)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        if id.generation != self.generation {
            return None;
        }
        self.groups.get_mut(id.index)
    }

    /// Replaces a group's transform. Returns `false` for a stale handle.
    pub fn set_transform(&mut self, id: GroupId, transform: Transform) -> bool {
        match self.group_mut(id) {
            Some(group) => {
                group.transform = transform;
                true
            }
            None => false,
        }
    }

    /// Groups back-to-front.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Total number of draw commands across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.list.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::ZIndex;

    #[test]
    fn clear_invalidates_handles() {
        let mut surface = Surface::new(Viewport::new(100.0, 100.0));
        let old = surface.append_group(Transform::identity());
        surface.clear();
        let new = surface.append_group(Transform::identity());

        assert!(surface.group(old).is_none());
        assert!(!surface.set_transform(old, Transform::translation(1.0, 1.0)));
        assert!(surface.group(new).is_some());
        assert_eq!(surface.groups().len(), 1);
    }

    #[test]
    fn set_transform_updates_group() {
        let mut surface = Surface::new(Viewport::new(100.0, 100.0));
        let id = surface.append_group(Transform::translation(40.0, 20.0));
        let zoom = Transform::new(Vec2::new(5.0, 5.0), 2.0);
        assert!(surface.set_transform(id, zoom));
        assert_eq!(surface.group(id).map(|g| g.transform), Some(zoom));
    }

    #[test]
    fn item_count_spans_groups() {
        let mut surface = Surface::new(Viewport::new(10.0, 10.0));
        let a = surface.append_group(Transform::identity());
        let b = surface.append_group(Transform::identity());
        for id in [a, a, b] {
            if let Some(g) = surface.group_mut(id) {
                g.list.push_circle(ZIndex(0), Vec2::zero(), 1.0, Color::black(), None);
            }
        }
        assert_eq!(surface.item_count(), 3);
        assert_eq!(surface.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
