use crate::coords::{CameraTile, DrawWindow, TileCoord};
use crate::grid::{
    ElementId, ElementTable, GroundObjectLayer, Scenery, SpanFlags, Tile, TileGrid, WallDecor, WallSide,
    WallSlot,
};
use crate::scene::CommandBuffer;

use super::queue::WorkQueues;
use super::state::{PaintState, TileStep};
use super::stats::PaintStats;

/// One traversal of the visibility window.
///
/// Borrows the painter's registered geometry read-only and its per-pass
/// scratch mutably. Tiles move through [`TileStep`] as their far-side
/// neighbors settle; every step either emits commands or queues the
/// neighbors it unblocks.
pub(crate) struct PaintPass<'a> {
    pub grid: &'a TileGrid,
    pub elements: &'a ElementTable,
    pub state: &'a mut PaintState,
    pub queues: &'a mut WorkQueues,
    pub out: &'a mut CommandBuffer,
    pub stats: &'a mut PaintStats,
    pub camera: CameraTile,
    pub window: DrawWindow,
    pub max_visible_level: u8,
}

impl PaintPass<'_> {
    /// Seeds each window corner at level 0 and drains the queues after each.
    pub fn run(&mut self) {
        for (x, z) in self.window.corners() {
            let seed = self.grid.index_at(x, z, 0);
            self.enqueue(seed, 0);
            self.drain();
        }
        debug_assert!(self.queues.is_empty());
    }

    fn drain(&mut self) {
        while let Some(entry) = self.queues.pop() {
            self.process(entry.tile(), entry.delay());
        }
    }

    #[inline]
    fn enqueue(&mut self, index: usize, delay: u8) {
        self.state.tile_mut(index).pending += 1;
        self.queues.push_follow(index, delay);
    }

    #[inline]
    fn enqueue_unless_done(&mut self, index: usize, delay: u8) {
        if self.state.tile(index).step != TileStep::Done {
            self.enqueue(index, delay);
        }
    }

    fn process(&mut self, index: usize, delay: u8) {
        let paint = self.state.tile_mut(index);
        debug_assert!(paint.pending > 0, "popped tile {index} with no pending entries");
        paint.pending -= 1;
        if paint.pending > 0 {
            self.stats.stale_pops += 1;
            return;
        }
        if paint.step == TileStep::Done {
            return;
        }

        let grid = self.grid;
        let tile = grid.tile(index);
        debug_assert!(self.window.contains(tile.coord().sx as i32, tile.coord().sz as i32));
        self.stats.tiles_processed += 1;

        if self.state.tile(index).step == TileStep::Ready {
            if tile.is_bridge_target() || tile.draw_level() > self.max_visible_level {
                // Drawn elsewhere or hidden; still releases the tiles in front.
                self.state.tile_mut(index).advance(TileStep::Done);
                self.release_nearer(tile.coord(), delay);
                return;
            }
            if !self.far_side_settled(tile) {
                self.stats.deferrals += 1;
                log::trace!("tile {} deferred: far side not settled", tile.coord());
                return;
            }
            self.state.tile_mut(index).advance(TileStep::Ground);
        }

        if self.state.tile(index).step == TileStep::Ground {
            self.paint_ground(index, tile, delay);
        }
        if self.state.tile(index).step == TileStep::WaitAdjacentGround {
            self.paint_locs(index, tile, delay);
        }
        if self.state.tile(index).step == TileStep::NearWall {
            self.paint_near_walls(index, tile);
        }
    }

    #[inline]
    fn step_at(&self, x: i32, z: i32, level: i32) -> TileStep {
        self.state.tile(self.grid.index_at(x, z, level)).step
    }

    /// Whether everything behind `tile` from the camera's point of view is done.
    ///
    /// A neighbor still waiting on shared scenery counts as settled when this
    /// tile is part of the same footprint.
    fn far_side_settled(&self, tile: &Tile) -> bool {
        let coord = tile.coord();
        let (x, z, level) = (coord.sx as i32, coord.sz as i32, coord.slevel as i32);
        let cam = self.camera;
        let w = self.window;

        if level > 0 && self.step_at(x, z, level - 1) != TileStep::Done {
            return false;
        }
        if x >= cam.sx && x + 1 < w.max_x && !self.neighbor_settled(tile, x + 1, z, SpanFlags::EAST) {
            return false;
        }
        if x <= cam.sx && x - 1 >= w.min_x && !self.neighbor_settled(tile, x - 1, z, SpanFlags::WEST) {
            return false;
        }
        if z >= cam.sz && z + 1 < w.max_z && !self.neighbor_settled(tile, x, z + 1, SpanFlags::NORTH) {
            return false;
        }
        if z <= cam.sz && z - 1 >= w.min_z && !self.neighbor_settled(tile, x, z - 1, SpanFlags::SOUTH) {
            return false;
        }
        true
    }

    fn neighbor_settled(&self, tile: &Tile, x: i32, z: i32, toward: SpanFlags) -> bool {
        match self.step_at(x, z, tile.coord().slevel as i32) {
            TileStep::Done => true,
            TileStep::WaitAdjacentGround => tile.spans().contains(toward),
            _ => false,
        }
    }

    /// Terrain, far walls and floor-level objects.
    fn paint_ground(&mut self, index: usize, tile: &Tile, delay: u8) {
        let coord = tile.coord();
        let (x, z, level) = (coord.sx as i32, coord.sz as i32, coord.slevel as i32);
        let cam = self.camera;
        let near = WallSide::facing_camera(cam.sx, cam.sz, x, z);

        let paint = self.state.tile_mut(index);
        paint.advance(TileStep::WaitAdjacentGround);
        paint.near_walls |= near;

        let grid = self.grid;
        if let Some(bridge) = tile.bridge() {
            self.paint_underpass(grid.tile(bridge));
        }

        self.out.push_terrain(TileCoord::new(coord.sx, coord.sz, tile.terrain_level()));
        self.draw_walls(tile, near.complement());
        if let Some(id) = tile.ground_decor() {
            self.draw(id);
        }
        if let Some(id) = tile.ground_object(GroundObjectLayer::Bottom) {
            self.draw(id);
        }
        self.draw_wall_decor(tile, near.complement(), false);

        // Footprint neighbors on the camera side can start their ground now.
        let spans = tile.spans();
        let w = self.window;
        if x < cam.sx && x + 1 < w.max_x && spans.contains(SpanFlags::EAST) {
            self.enqueue_unless_done(grid.index_at(x + 1, z, level), delay);
        }
        if x > cam.sx && x - 1 >= w.min_x && spans.contains(SpanFlags::WEST) {
            self.enqueue_unless_done(grid.index_at(x - 1, z, level), delay);
        }
        if z < cam.sz && z + 1 < w.max_z && spans.contains(SpanFlags::NORTH) {
            self.enqueue_unless_done(grid.index_at(x, z + 1, level), delay);
        }
        if z > cam.sz && z - 1 >= w.min_z && spans.contains(SpanFlags::SOUTH) {
            self.enqueue_unless_done(grid.index_at(x, z - 1, level), delay);
        }
    }

    /// Content of a bridge target, drawn beneath the tile that links to it.
    fn paint_underpass(&mut self, under: &Tile) {
        let coord = under.coord();
        self.out.push_terrain(TileCoord::new(coord.sx, coord.sz, under.terrain_level()));
        if let Some(id) = under.wall(WallSlot::A) {
            self.draw(id);
        }
        for &id in under.scenery() {
            if !self.state.is_drawn(id) {
                self.state.mark_drawn(id);
                self.draw(id);
            }
        }
    }

    /// Scenery whose whole footprint has its ground down, then the release of
    /// everything in front of the tile.
    fn paint_locs(&mut self, index: usize, tile: &Tile, delay: u8) {
        let elements = self.elements;
        let level = tile.coord().slevel as i32;
        let mut waiting = false;

        for &id in tile.scenery() {
            if self.state.is_drawn(id) {
                continue;
            }
            let element = elements.get(id);
            let Some(scenery) = element.as_scenery() else {
                continue;
            };
            let footprint = self.footprint(element.coord, scenery);
            if !self.footprint_grounded(footprint, level) {
                waiting = true;
                continue;
            }

            self.state.mark_drawn(id);
            self.out.push_element(scenery.entity);
            self.enqueue_footprint(footprint, element.coord, tile.coord(), scenery.span_delay());
        }

        if waiting {
            self.stats.deferrals += 1;
            log::trace!("tile {} waiting on scenery footprint", tile.coord());
            return;
        }

        self.state.tile_mut(index).advance(TileStep::Locs);
        for layer in [GroundObjectLayer::Middle, GroundObjectLayer::Top] {
            if let Some(id) = tile.ground_object(layer) {
                self.draw(id);
            }
        }
        self.release_nearer(tile.coord(), delay);
        self.state.tile_mut(index).advance(TileStep::NearWall);
    }

    fn paint_near_walls(&mut self, index: usize, tile: &Tile) {
        let near = self.state.tile(index).near_walls;
        self.draw_wall_decor(tile, near, true);
        self.draw_walls(tile, near);
        self.state.tile_mut(index).advance(TileStep::Done);
    }

    /// Inclusive footprint of `scenery` anchored at `anchor`, clipped to the window.
    fn footprint(&self, anchor: TileCoord, scenery: &Scenery) -> (i32, i32, i32, i32) {
        let x0 = anchor.sx as i32;
        let z0 = anchor.sz as i32;
        let x1 = (x0 + scenery.size_x as i32 - 1).min(self.grid.width() as i32 - 1);
        let z1 = (z0 + scenery.size_z as i32 - 1).min(self.grid.height() as i32 - 1);
        // The processing tile lies inside both, so the clip is never empty.
        self.window.clip_inclusive(x0, z0, x1, z1).unwrap_or((x0, z0, x0, z0))
    }

    fn footprint_grounded(&self, (x0, z0, x1, z1): (i32, i32, i32, i32), level: i32) -> bool {
        (x0..=x1).all(|x| (z0..=z1).all(|z| self.step_at(x, z, level) > TileStep::Ground))
    }

    /// Re-queues the other footprint tiles so they can finish their loc phase,
    /// walking from the anchor corner nearest the camera.
    ///
    /// Larger objects go through the catch-up queue so the footprint settles
    /// before unrelated ring work resumes.
    fn enqueue_footprint(
        &mut self,
        (x0, z0, x1, z1): (i32, i32, i32, i32),
        anchor: TileCoord,
        current: TileCoord,
        span_delay: u8,
    ) {
        let grid = self.grid;
        let level = current.slevel as i32;
        let ascending_x = anchor.sx as i32 <= self.camera.sx;
        let ascending_z = anchor.sz as i32 <= self.camera.sz;

        for i in 0..=(x1 - x0) {
            let x = if ascending_x { x0 + i } else { x1 - i };
            for j in 0..=(z1 - z0) {
                let z = if ascending_z { z0 + j } else { z1 - j };
                if x == current.sx as i32 && z == current.sz as i32 {
                    continue;
                }
                self.enqueue(grid.index_at(x, z, level), span_delay);
            }
        }
    }

    /// Queues the tile above and the neighbors on the camera side.
    fn release_nearer(&mut self, coord: TileCoord, delay: u8) {
        let grid = self.grid;
        let (x, z, level) = (coord.sx as i32, coord.sz as i32, coord.slevel as i32);
        let cam = self.camera;
        let w = self.window;

        if level + 1 < grid.levels() as i32 {
            self.enqueue_unless_done(grid.index_at(x, z, level + 1), delay);
        }
        if x < cam.sx && x + 1 < w.max_x {
            self.enqueue_unless_done(grid.index_at(x + 1, z, level), delay);
        }
        if x > cam.sx && x - 1 >= w.min_x {
            self.enqueue_unless_done(grid.index_at(x - 1, z, level), delay);
        }
        if z < cam.sz && z + 1 < w.max_z {
            self.enqueue_unless_done(grid.index_at(x, z + 1, level), delay);
        }
        if z > cam.sz && z - 1 >= w.min_z {
            self.enqueue_unless_done(grid.index_at(x, z - 1, level), delay);
        }
    }

    #[inline]
    fn draw(&mut self, id: ElementId) {
        self.out.push_element(self.elements.get(id).entity());
    }

    fn draw_walls(&mut self, tile: &Tile, mask: WallSide) {
        let elements = self.elements;
        for slot in [WallSlot::A, WallSlot::B] {
            let Some(id) = tile.wall(slot) else {
                continue;
            };
            if elements.get(id).as_wall().is_some_and(|w| w.side.intersects(mask)) {
                self.draw(id);
            }
        }
    }

    /// Wall decorations for one phase.
    ///
    /// A through-wall pair draws exactly one face per phase, picked by which
    /// face points at the camera; otherwise each decoration follows `mask`.
    fn draw_wall_decor(&mut self, tile: &Tile, mask: WallSide, near_phase: bool) {
        let elements = self.elements;
        let decor_a = tile.wall_decor(WallSlot::A);
        let decor_b = tile.wall_decor(WallSlot::B);

        let through_wall = decor_a
            .map(|id| (id, elements.get(id)))
            .and_then(|(id, e)| e.as_wall_decor().filter(|d| d.is_through_wall()).map(|d| (id, e.coord, *d)));

        if let Some((a, coord, decor)) = through_wall {
            if face_a_toward_camera(coord, &decor, self.camera) == near_phase {
                self.draw(a);
            } else if let Some(b) = decor_b {
                self.draw(b);
            }
            return;
        }

        for id in [decor_a, decor_b].into_iter().flatten() {
            if elements.get(id).as_wall_decor().is_some_and(|d| d.side.intersects(mask)) {
                self.draw(id);
            }
        }
    }
}

/// Whether face A of a through-wall decoration points at the camera.
///
/// Compares the camera offset along both axes, mirrored for the corner the
/// decoration sits on.
pub(crate) fn face_a_toward_camera(coord: TileCoord, decor: &WallDecor, camera: CameraTile) -> bool {
    let dx = coord.sx as i32 - camera.sx;
    let dz = coord.sz as i32 - camera.sz;
    let x_near = if decor.side.intersects(WallSide::NORTHEAST | WallSide::SOUTHEAST) { -dx } else { dx };
    let z_near = if decor.side.intersects(WallSide::SOUTHEAST | WallSide::SOUTHWEST) { -dz } else { dz };
    z_near >= x_near
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{EntityId, ThroughWallFlags};

    fn decor(side: WallSide) -> WallDecor {
        WallDecor { entity: EntityId(1), side, flags: ThroughWallFlags::THROUGH_WALL }
    }

    #[test]
    fn face_a_follows_camera_offset() {
        let at = TileCoord::new(4, 4, 0);
        // Camera north: dz = -4, dx = 0.
        assert!(!face_a_toward_camera(at, &decor(WallSide::WEST), CameraTile::new(4, 8, 0)));
        // Camera east: dx = -4, dz = 0.
        assert!(face_a_toward_camera(at, &decor(WallSide::WEST), CameraTile::new(8, 4, 0)));
    }

    #[test]
    fn south_east_corner_mirrors_both_axes() {
        let at = TileCoord::new(4, 4, 0);
        assert!(face_a_toward_camera(at, &decor(WallSide::SOUTHEAST), CameraTile::new(4, 8, 0)));
        assert!(!face_a_toward_camera(at, &decor(WallSide::SOUTHEAST), CameraTile::new(8, 4, 0)));
    }

    #[test]
    fn camera_on_tile_sees_face_a() {
        let at = TileCoord::new(2, 2, 0);
        assert!(face_a_toward_camera(at, &decor(WallSide::NORTH), CameraTile::new(2, 2, 0)));
    }
}
