use crate::grid::{ElementId, WallSide};

/// Progress of one tile within a paint pass.
///
/// Steps only move forward during a pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TileStep {
    /// Waiting for the tile below and the far-side neighbors.
    #[default]
    Ready,
    /// Cleared to draw terrain and far-side geometry.
    Ground,
    /// Ground drawn; scenery waits for the rest of its footprint.
    WaitAdjacentGround,
    /// Scenery drawn; neighbors toward the camera are being released.
    Locs,
    /// Only camera-facing walls remain.
    NearWall,
    Done,
}

#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct TilePaint {
    pub step: TileStep,
    /// Queue entries for this tile not yet popped.
    pub pending: u32,
    /// Camera-facing sides, accumulated when the ground is drawn.
    pub near_walls: WallSide,
}

impl TilePaint {
    #[inline]
    pub fn advance(&mut self, next: TileStep) {
        debug_assert!(next >= self.step, "tile step moved back: {:?} -> {next:?}", self.step);
        self.step = next;
    }
}

/// Transient per-pass state for every tile and element.
#[derive(Debug, Default)]
pub(crate) struct PaintState {
    tiles: Vec<TilePaint>,
    drawn: Vec<bool>,
}

impl PaintState {
    /// Resets to the initial state, resizing to the current grid and table.
    pub fn reset(&mut self, tile_count: usize, element_count: usize) {
        self.tiles.clear();
        self.tiles.resize(tile_count, TilePaint::default());
        self.drawn.clear();
        self.drawn.resize(element_count, false);
    }

    #[inline]
    pub fn tile(&self, index: usize) -> &TilePaint {
        &self.tiles[index]
    }

    #[inline]
    pub fn tile_mut(&mut self, index: usize) -> &mut TilePaint {
        &mut self.tiles[index]
    }

    /// Step of a tile, `Ready` when no pass has touched it yet.
    #[inline]
    pub fn step(&self, index: usize) -> TileStep {
        self.tiles.get(index).map_or(TileStep::Ready, |t| t.step)
    }

    #[inline]
    pub fn is_drawn(&self, id: ElementId) -> bool {
        self.drawn[id.index()]
    }

    #[inline]
    pub fn mark_drawn(&mut self, id: ElementId) {
        self.drawn[id.index()] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_ordered() {
        assert!(TileStep::Ready < TileStep::Ground);
        assert!(TileStep::Ground < TileStep::WaitAdjacentGround);
        assert!(TileStep::WaitAdjacentGround < TileStep::Locs);
        assert!(TileStep::Locs < TileStep::NearWall);
        assert!(TileStep::NearWall < TileStep::Done);
    }

    #[test]
    fn reset_clears_previous_pass() {
        let mut s = PaintState::default();
        s.reset(4, 2);
        s.tile_mut(1).advance(TileStep::Done);
        s.tile_mut(1).pending = 3;
        s.mark_drawn(ElementId(1));

        s.reset(4, 3);
        assert_eq!(s.step(1), TileStep::Ready);
        assert_eq!(s.tile(1).pending, 0);
        assert!(!s.is_drawn(ElementId(1)));
        assert!(!s.is_drawn(ElementId(2)));
    }

    #[test]
    fn untouched_tiles_read_ready() {
        let s = PaintState::default();
        assert_eq!(s.step(42), TileStep::Ready);
    }
}
