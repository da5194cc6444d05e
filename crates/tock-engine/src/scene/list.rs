use super::DrawCmd;

/// Recorded draw stream for a frame, painted in insertion order.
///
/// `clear()` keeps the allocation, so a list reused across frames stops
/// allocating once warmed up.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Commands back-to-front.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::ShapeId;
    use crate::paint::Color;
    use crate::scene::Transform;

    #[test]
    fn keeps_insertion_order() {
        let mut list = DrawList::new();
        list.push_shape(ShapeId::Bezel, Transform::IDENTITY, Color::black());
        list.push_shape(ShapeId::Dial, Transform::IDENTITY, Color::white());
        let ids: Vec<ShapeId> = list
            .iter()
            .map(|c| match c {
                DrawCmd::Shape(s) => s.shape,
            })
            .collect();
        assert_eq!(ids, vec![ShapeId::Bezel, ShapeId::Dial]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_shape(ShapeId::CenterCap, Transform::IDENTITY, Color::black());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
