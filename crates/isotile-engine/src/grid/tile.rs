use crate::coords::TileCoord;

use super::{ElementId, GroundObjectLayer, SpanFlags, TileFlags, WallSlot};

/// Scenery references a single tile can hold.
pub const MAX_SCENERY_PER_TILE: usize = 10;

/// One cell of the tile grid.
///
/// Slots hold element ids; the elements themselves live in the element table.
/// The tile also remembers its own grid address, which survives `copy_from`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    coord: TileCoord,

    scenery: [ElementId; MAX_SCENERY_PER_TILE],
    scenery_count: u8,

    wall_a: Option<ElementId>,
    wall_b: Option<ElementId>,
    wall_decor_a: Option<ElementId>,
    wall_decor_b: Option<ElementId>,
    ground_decor: Option<ElementId>,
    ground_objects: [Option<ElementId>; 3],

    /// Grid index of the tile drawn underneath this one.
    bridge: Option<usize>,

    spans: SpanFlags,
    draw_level: u8,
    terrain_level: u8,
    flags: TileFlags,
}

impl Tile {
    pub(crate) fn new(coord: TileCoord) -> Self {
        Self {
            coord,
            scenery: [ElementId::default(); MAX_SCENERY_PER_TILE],
            scenery_count: 0,
            wall_a: None,
            wall_b: None,
            wall_decor_a: None,
            wall_decor_b: None,
            ground_decor: None,
            ground_objects: [None; 3],
            bridge: None,
            spans: SpanFlags::empty(),
            draw_level: coord.slevel,
            terrain_level: coord.slevel,
            flags: TileFlags::empty(),
        }
    }

    // ── reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn coord(&self) -> TileCoord {
        self.coord
    }

    /// Scenery overlapping this tile, in registration order.
    #[inline]
    pub fn scenery(&self) -> &[ElementId] {
        &self.scenery[..self.scenery_count as usize]
    }

    #[inline]
    pub fn wall(&self, slot: WallSlot) -> Option<ElementId> {
        match slot {
            WallSlot::A => self.wall_a,
            WallSlot::B => self.wall_b,
        }
    }

    #[inline]
    pub fn wall_decor(&self, slot: WallSlot) -> Option<ElementId> {
        match slot {
            WallSlot::A => self.wall_decor_a,
            WallSlot::B => self.wall_decor_b,
        }
    }

    #[inline]
    pub fn ground_decor(&self) -> Option<ElementId> {
        self.ground_decor
    }

    #[inline]
    pub fn ground_object(&self, layer: GroundObjectLayer) -> Option<ElementId> {
        self.ground_objects[layer.slot()]
    }

    #[inline]
    pub fn bridge(&self) -> Option<usize> {
        self.bridge
    }

    #[inline]
    pub fn spans(&self) -> SpanFlags {
        self.spans
    }

    #[inline]
    pub fn draw_level(&self) -> u8 {
        self.draw_level
    }

    #[inline]
    pub fn terrain_level(&self) -> u8 {
        self.terrain_level
    }

    #[inline]
    pub fn flags(&self) -> TileFlags {
        self.flags
    }

    #[inline]
    pub fn is_bridge_target(&self) -> bool {
        self.flags.contains(TileFlags::BRIDGE_TARGET)
    }

    // ── writes (registration only) ────────────────────────────────────────

    pub(crate) fn push_scenery(&mut self, id: ElementId) {
        let n = self.scenery_count as usize;
        assert!(n < MAX_SCENERY_PER_TILE, "tile {} already holds {MAX_SCENERY_PER_TILE} scenery", self.coord);
        self.scenery[n] = id;
        self.scenery_count += 1;
    }

    pub(crate) fn set_wall(&mut self, slot: WallSlot, id: ElementId) {
        let target = match slot {
            WallSlot::A => &mut self.wall_a,
            WallSlot::B => &mut self.wall_b,
        };
        assert!(target.is_none(), "tile {} wall {slot:?} already set", self.coord);
        *target = Some(id);
    }

    pub(crate) fn set_wall_decor(&mut self, slot: WallSlot, id: ElementId) {
        let target = match slot {
            WallSlot::A => &mut self.wall_decor_a,
            WallSlot::B => &mut self.wall_decor_b,
        };
        assert!(target.is_none(), "tile {} wall decor {slot:?} already set", self.coord);
        *target = Some(id);
    }

    pub(crate) fn set_ground_decor(&mut self, id: ElementId) {
        assert!(self.ground_decor.is_none(), "tile {} ground decor already set", self.coord);
        self.ground_decor = Some(id);
    }

    pub(crate) fn set_ground_object(&mut self, layer: GroundObjectLayer, id: ElementId) {
        let target = &mut self.ground_objects[layer.slot()];
        assert!(target.is_none(), "tile {} ground object {layer:?} already set", self.coord);
        *target = Some(id);
    }

    #[inline]
    pub(crate) fn add_spans(&mut self, spans: SpanFlags) {
        self.spans |= spans;
    }

    #[inline]
    pub(crate) fn set_spans(&mut self, spans: SpanFlags) {
        self.spans = spans;
    }

    #[inline]
    pub(crate) fn set_bridge(&mut self, target: usize) {
        self.bridge = Some(target);
    }

    #[inline]
    pub(crate) fn insert_flags(&mut self, flags: TileFlags) {
        self.flags |= flags;
    }

    #[inline]
    pub(crate) fn set_draw_level(&mut self, level: u8) {
        self.draw_level = level;
    }

    #[inline]
    pub(crate) fn set_terrain_level(&mut self, level: u8) {
        self.terrain_level = level;
    }

    /// Copies all content of `src`, keeping this tile's grid address.
    pub(crate) fn copy_from(&mut self, src: &Tile) {
        let coord = self.coord;
        *self = src.clone();
        self.coord = coord;
    }

    /// Removes every reference to an element with id `>= first`.
    pub(crate) fn forget_elements_from(&mut self, first: ElementId) {
        let keep = |id: &ElementId| *id < first;

        let mut kept = 0;
        for i in 0..self.scenery_count as usize {
            let id = self.scenery[i];
            if keep(&id) {
                self.scenery[kept] = id;
                kept += 1;
            }
        }
        self.scenery_count = kept as u8;

        for slot in [
            &mut self.wall_a,
            &mut self.wall_b,
            &mut self.wall_decor_a,
            &mut self.wall_decor_b,
            &mut self.ground_decor,
        ] {
            if slot.is_some_and(|id| !keep(&id)) {
                *slot = None;
            }
        }
        for slot in &mut self.ground_objects {
            if slot.is_some_and(|id| !keep(&id)) {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile::new(TileCoord::new(3, 4, 1))
    }

    #[test]
    fn defaults_follow_grid_level() {
        let t = tile();
        assert_eq!(t.draw_level(), 1);
        assert_eq!(t.terrain_level(), 1);
        assert!(t.scenery().is_empty());
        assert!(t.spans().is_empty());
        assert!(!t.is_bridge_target());
    }

    #[test]
    #[should_panic(expected = "already holds")]
    fn scenery_overflow_panics() {
        let mut t = tile();
        for i in 0..=MAX_SCENERY_PER_TILE as u32 {
            t.push_scenery(ElementId(i));
        }
    }

    #[test]
    #[should_panic(expected = "wall A already set")]
    fn wall_slot_is_single_use() {
        let mut t = tile();
        t.set_wall(WallSlot::A, ElementId(0));
        t.set_wall(WallSlot::A, ElementId(1));
    }

    #[test]
    fn copy_keeps_address() {
        let mut src = Tile::new(TileCoord::new(0, 0, 2));
        src.push_scenery(ElementId(5));
        src.add_spans(SpanFlags::EAST);

        let mut dst = tile();
        dst.copy_from(&src);
        assert_eq!(dst.coord(), TileCoord::new(3, 4, 1));
        assert_eq!(dst.scenery(), &[ElementId(5)]);
        assert_eq!(dst.spans(), SpanFlags::EAST);
        assert_eq!(dst.terrain_level(), 2);
    }

    #[test]
    fn forget_drops_only_later_elements() {
        let mut t = tile();
        t.push_scenery(ElementId(1));
        t.push_scenery(ElementId(8));
        t.push_scenery(ElementId(2));
        t.set_wall(WallSlot::A, ElementId(3));
        t.set_wall(WallSlot::B, ElementId(9));
        t.set_ground_object(GroundObjectLayer::Top, ElementId(7));

        t.forget_elements_from(ElementId(5));
        assert_eq!(t.scenery(), &[ElementId(1), ElementId(2)]);
        assert_eq!(t.wall(WallSlot::A), Some(ElementId(3)));
        assert_eq!(t.wall(WallSlot::B), None);
        assert_eq!(t.ground_object(GroundObjectLayer::Top), None);
    }
}
