use crate::coords::TileCoord;
use crate::grid::{
    Element, ElementId, ElementKind, EntityId, GroundDecor, GroundObject, GroundObjectLayer, MAX_SCENERY_PER_TILE,
    Scenery, SpanFlags, ThroughWallFlags, Tile, TileFlags, Wall, WallDecor, WallSide, WallSlot,
};
use crate::scene::PackedCmd;

use super::{Painter, StaticMark};

/// Largest scenery footprint along either axis.
pub const MAX_SCENERY_SIZE: u8 = 15;

impl Painter {
    // ── elements ──────────────────────────────────────────────────────────

    /// Places a wall in `slot` of the tile at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is outside the grid or the slot is taken.
    pub fn add_wall(&mut self, coord: TileCoord, slot: WallSlot, entity: EntityId, side: WallSide) -> ElementId {
        let index = self.grid.index(coord);
        check_entity(entity);
        assert!(self.grid.tile(index).wall(slot).is_none(), "tile {coord} wall {slot:?} already set");

        let wall = Wall { entity, side };
        let kind = match slot {
            WallSlot::A => ElementKind::WallA(wall),
            WallSlot::B => ElementKind::WallB(wall),
        };
        let id = self.elements.push(Element { coord, kind });
        self.grid.tile_mut(index).set_wall(slot, id);
        id
    }

    /// Places a wall decoration in `slot`.
    ///
    /// With [`ThroughWallFlags::THROUGH_WALL`] on the A decoration, A and B
    /// are treated as the two faces of one decoration.
    pub fn add_wall_decor(
        &mut self,
        coord: TileCoord,
        slot: WallSlot,
        entity: EntityId,
        side: WallSide,
        flags: ThroughWallFlags,
    ) -> ElementId {
        let index = self.grid.index(coord);
        check_entity(entity);
        assert!(self.grid.tile(index).wall_decor(slot).is_none(), "tile {coord} wall decor {slot:?} already set");

        let kind = ElementKind::WallDecor(WallDecor { entity, side, flags });
        let id = self.elements.push(Element { coord, kind });
        self.grid.tile_mut(index).set_wall_decor(slot, id);
        id
    }

    /// Places scenery covering `size_x` x `size_z` tiles from `coord` toward
    /// +x and +z.
    ///
    /// Every covered tile inside the grid receives the element and span flags
    /// toward its covered neighbors. The footprint is clipped at the grid edge.
    ///
    /// # Panics
    /// Panics if a size is outside `1..=15` or a covered tile already holds
    /// [`MAX_SCENERY_PER_TILE`] scenery.
    pub fn add_normal_scenery(&mut self, coord: TileCoord, entity: EntityId, size_x: u8, size_z: u8) -> ElementId {
        let sizes = 1..=MAX_SCENERY_SIZE;
        assert!(
            sizes.contains(&size_x) && sizes.contains(&size_z),
            "scenery at {coord} has footprint {size_x}x{size_z}, sizes must be within {sizes:?}"
        );
        assert!(self.grid.contains(coord), "scenery anchor {coord} outside grid");
        check_entity(entity);

        let x0 = coord.sx;
        let z0 = coord.sz;
        let x1 = (x0 + size_x as u16 - 1).min(self.grid.width() - 1);
        let z1 = (z0 + size_z as u16 - 1).min(self.grid.height() - 1);
        for x in x0..=x1 {
            for z in z0..=z1 {
                let tile = self.grid.tile_at(TileCoord::new(x, z, coord.slevel));
                assert!(
                    tile.scenery().len() < MAX_SCENERY_PER_TILE,
                    "tile {} already holds {MAX_SCENERY_PER_TILE} scenery",
                    tile.coord()
                );
            }
        }

        let kind = ElementKind::Scenery(Scenery { entity, size_x, size_z });
        let id = self.elements.push(Element { coord, kind });

        for x in x0..=x1 {
            for z in z0..=z1 {
                let mut spans = SpanFlags::empty();
                spans.set(SpanFlags::WEST, x > x0);
                spans.set(SpanFlags::EAST, x < x1);
                spans.set(SpanFlags::SOUTH, z > z0);
                spans.set(SpanFlags::NORTH, z < z1);

                let tile = self.grid.tile_at_mut(TileCoord::new(x, z, coord.slevel));
                tile.add_spans(spans);
                tile.push_scenery(id);
            }
        }
        id
    }

    pub fn add_ground_decor(&mut self, coord: TileCoord, entity: EntityId) -> ElementId {
        let index = self.grid.index(coord);
        check_entity(entity);
        assert!(self.grid.tile(index).ground_decor().is_none(), "tile {coord} ground decor already set");

        let kind = ElementKind::GroundDecor(GroundDecor { entity });
        let id = self.elements.push(Element { coord, kind });
        self.grid.tile_mut(index).set_ground_decor(id);
        id
    }

    /// Places an item stack layer. The bottom layer draws with the floor,
    /// middle and top after the tile's scenery.
    pub fn add_ground_object(&mut self, coord: TileCoord, layer: GroundObjectLayer, entity: EntityId) -> ElementId {
        let index = self.grid.index(coord);
        check_entity(entity);
        assert!(
            self.grid.tile(index).ground_object(layer).is_none(),
            "tile {coord} ground object {layer:?} already set"
        );

        let kind = ElementKind::GroundObject(GroundObject { entity });
        let id = self.elements.push(Element { coord, kind });
        self.grid.tile_mut(index).set_ground_object(layer, id);
        id
    }

    // ── tile properties ───────────────────────────────────────────────────

    /// Links `coord` to the tile drawn beneath it and marks `target` so it is
    /// never painted on its own.
    ///
    /// # Panics
    /// Panics if either tile is outside the grid or they are the same tile.
    pub fn set_bridge(&mut self, coord: TileCoord, target: TileCoord) {
        let index = self.grid.index(coord);
        let target_index = self.grid.index(target);
        assert!(index != target_index, "tile {coord} cannot bridge to itself");

        self.grid.tile_mut(index).set_bridge(target_index);
        self.grid.tile_mut(target_index).insert_flags(TileFlags::BRIDGE_TARGET);
    }

    /// Sets the level compared against the visibility cutoff.
    pub fn set_draw_level(&mut self, coord: TileCoord, level: u8) {
        assert!(level < self.grid.levels(), "draw level {level} outside grid levels");
        let index = self.grid.index(coord);
        self.grid.tile_mut(index).set_draw_level(level);
    }

    /// Sets the level used by the tile's terrain command.
    pub fn set_terrain_level(&mut self, coord: TileCoord, level: u8) {
        assert!(level < self.grid.levels(), "terrain level {level} outside grid levels");
        debug_assert!(level <= PackedCmd::MAX_TERRAIN_LEVEL);
        let index = self.grid.index(coord);
        self.grid.tile_mut(index).set_terrain_level(level);
    }

    /// Copies every slot and property of `src` onto `dst`; `dst` keeps its
    /// own address.
    ///
    /// Used to shift a column down one level under a bridge.
    pub fn copy_tile(&mut self, src: TileCoord, dst: TileCoord) {
        let from = self.grid.index(src);
        let to = self.grid.index(dst);
        if from == to {
            return;
        }
        let content = self.grid.tile(from).clone();
        self.grid.tile_mut(to).copy_from(&content);
    }

    /// Moves every level of the column at (`sx`, `sz`) down by one and wraps
    /// the old level 0 around to the top level.
    ///
    /// Each shifted tile draws at its new level. Returns the top-level
    /// address now holding the old level 0, ready to be a bridge target.
    pub fn shift_column_down(&mut self, sx: u16, sz: u16) -> TileCoord {
        let base = TileCoord::new(sx, sz, 0);
        let bottom = self.grid.tile(self.grid.index(base)).clone();
        let top = self.grid.levels() - 1;

        for level in 0..top {
            self.copy_tile(base.with_level(level + 1), base.with_level(level));
            self.set_draw_level(base.with_level(level), level);
        }

        let wrapped = base.with_level(top);
        let index = self.grid.index(wrapped);
        self.grid.tile_mut(index).copy_from(&bottom);
        wrapped
    }

    // ── static / dynamic layering ─────────────────────────────────────────

    /// Records the current elements and span flags as the static layer.
    ///
    /// Elements registered afterwards are dropped again by
    /// [`Painter::reset_to_static`].
    pub fn mark_static(&mut self) {
        self.static_mark = Some(StaticMark {
            element_count: self.elements.len(),
            spans: self.grid.tiles().iter().map(Tile::spans).collect(),
        });
        log::debug!("static layer marked at {} elements", self.elements.len());
    }

    /// Drops every element registered since [`Painter::mark_static`] and
    /// restores the span flags recorded then.
    ///
    /// Without a mark every element is dropped. Bridge links and levels are
    /// left as they are.
    pub fn reset_to_static(&mut self) {
        let (keep, spans) = match &self.static_mark {
            Some(mark) => (mark.element_count, Some(&mark.spans)),
            None => (0, None),
        };
        let first = ElementId(keep as u32);

        for (i, tile) in self.grid.tiles_mut().iter_mut().enumerate() {
            tile.forget_elements_from(first);
            tile.set_spans(spans.map_or(SpanFlags::empty(), |s| s[i]));
        }
        let dropped = self.elements.len() - keep;
        self.elements.truncate(keep);
        log::debug!("dropped {dropped} dynamic elements");
    }
}

/// # Panics
/// Panics if `entity` does not fit a packed command.
#[inline]
fn check_entity(entity: EntityId) {
    assert!(entity <= EntityId::MAX, "entity {} exceeds packed range", entity.0);
}
