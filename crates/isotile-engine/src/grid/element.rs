use crate::coords::TileCoord;

use super::{ThroughWallFlags, WallSide};

/// Index into the painter's element table, returned by every registration call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementId(pub u32);

impl ElementId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque id the rasterizer resolves to a model and position.
///
/// Limited to 28 bits so it fits a packed command record.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    pub const MAX: EntityId = EntityId((1 << 28) - 1);
}

/// Which of the two wall (or wall decoration) slots of a tile to fill.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WallSlot {
    A,
    B,
}

/// Stacking position of a ground object on its tile.
///
/// `Bottom` lies on the floor and draws with the ground; `Middle` and `Top`
/// rest on scenery (tables, counters) and draw after it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GroundObjectLayer {
    Bottom,
    Middle,
    Top,
}

impl GroundObjectLayer {
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        match self {
            GroundObjectLayer::Bottom => 0,
            GroundObjectLayer::Middle => 1,
            GroundObjectLayer::Top => 2,
        }
    }
}

/// Scenery ("normal loc") with a rectangular footprint anchored at its
/// south-west tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Scenery {
    pub entity: EntityId,
    pub size_x: u8,
    pub size_z: u8,
}

impl Scenery {
    /// Catch-up delay for the footprint re-enqueue: the larger footprint axis,
    /// or 0 for single-tile scenery.
    #[inline]
    pub fn span_delay(&self) -> u8 {
        if self.size_x > 1 || self.size_z > 1 {
            self.size_x.max(self.size_z)
        } else {
            0
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Wall {
    pub entity: EntityId,
    pub side: WallSide,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WallDecor {
    pub entity: EntityId,
    /// For through-wall decorations, the side decoration A faces.
    pub side: WallSide,
    pub flags: ThroughWallFlags,
}

impl WallDecor {
    #[inline]
    pub fn is_through_wall(&self) -> bool {
        self.flags.contains(ThroughWallFlags::THROUGH_WALL)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GroundDecor {
    pub entity: EntityId,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GroundObject {
    pub entity: EntityId,
}

/// Kind-specific payload of an element.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ElementKind {
    Scenery(Scenery),
    WallA(Wall),
    WallB(Wall),
    GroundDecor(GroundDecor),
    WallDecor(WallDecor),
    GroundObject(GroundObject),
}

/// A placed drawable object.
///
/// `coord` is the anchor tile the element was registered at. Tiles may refer to
/// elements anchored elsewhere (multi-tile scenery, copied or bridged tiles).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Element {
    pub coord: TileCoord,
    pub kind: ElementKind,
}

impl Element {
    #[inline]
    pub fn entity(&self) -> EntityId {
        match self.kind {
            ElementKind::Scenery(s) => s.entity,
            ElementKind::WallA(w) | ElementKind::WallB(w) => w.entity,
            ElementKind::GroundDecor(d) => d.entity,
            ElementKind::WallDecor(d) => d.entity,
            ElementKind::GroundObject(o) => o.entity,
        }
    }

    #[inline]
    pub fn as_scenery(&self) -> Option<&Scenery> {
        match &self.kind {
            ElementKind::Scenery(s) => Some(s),
            _ => None,
        }
    }

    /// Wall payload for either slot.
    #[inline]
    pub fn as_wall(&self) -> Option<&Wall> {
        match &self.kind {
            ElementKind::WallA(w) | ElementKind::WallB(w) => Some(w),
            _ => None,
        }
    }

    #[inline]
    pub fn as_wall_decor(&self) -> Option<&WallDecor> {
        match &self.kind {
            ElementKind::WallDecor(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_delay_uses_larger_axis() {
        let s = |x, z| Scenery { entity: EntityId(0), size_x: x, size_z: z };
        assert_eq!(s(1, 1).span_delay(), 0);
        assert_eq!(s(2, 1).span_delay(), 2);
        assert_eq!(s(1, 3).span_delay(), 3);
        assert_eq!(s(4, 2).span_delay(), 4);
    }

    #[test]
    fn entity_reads_through_every_kind() {
        let at = TileCoord::new(0, 0, 0);
        let kinds = [
            ElementKind::Scenery(Scenery { entity: EntityId(1), size_x: 1, size_z: 1 }),
            ElementKind::WallA(Wall { entity: EntityId(2), side: WallSide::WEST }),
            ElementKind::WallB(Wall { entity: EntityId(3), side: WallSide::NORTH }),
            ElementKind::GroundDecor(GroundDecor { entity: EntityId(4) }),
            ElementKind::WallDecor(WallDecor {
                entity: EntityId(5),
                side: WallSide::EAST,
                flags: ThroughWallFlags::empty(),
            }),
            ElementKind::GroundObject(GroundObject { entity: EntityId(6) }),
        ];
        let ids: Vec<u32> = kinds.iter().map(|&kind| Element { coord: at, kind }.entity().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
