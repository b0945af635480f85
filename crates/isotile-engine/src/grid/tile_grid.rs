use crate::coords::TileCoord;
use crate::scene::PackedCmd;

use super::Tile;

/// Elevation levels a grid may have.
pub const MAX_LEVELS: u8 = 4;

/// Tiles a grid may have along x or z; bounded by the packed terrain command.
pub const MAX_GRID_EXTENT: u16 = PackedCmd::MAX_TERRAIN_COORD + 1;

/// Fixed `width` x `height` x `levels` array of tiles.
///
/// Indexing is x-major within a row, rows within a level:
/// `index = sx + sz * width + slevel * width * height`.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: u16,
    height: u16,
    levels: u8,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Allocates every tile of the grid. Dimensions are validated by the caller.
    pub(crate) fn new(width: u16, height: u16, levels: u8) -> Self {
        let count = width as usize * height as usize * levels as usize;
        let mut tiles = Vec::with_capacity(count);
        for slevel in 0..levels {
            for sz in 0..height {
                for sx in 0..width {
                    tiles.push(Tile::new(TileCoord::new(sx, sz, slevel)));
                }
            }
        }
        Self { width, height, levels, tiles }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn levels(&self) -> u8 {
        self.levels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.sx < self.width && coord.sz < self.height && coord.slevel < self.levels
    }

    /// Grid index of `coord`.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn index(&self, coord: TileCoord) -> usize {
        assert!(
            self.contains(coord),
            "tile {coord} outside {}x{}x{} grid",
            self.width,
            self.height,
            self.levels
        );
        self.raw_index(coord.sx as usize, coord.sz as usize, coord.slevel as usize)
    }

    /// Grid index for signed coordinates known to be in range.
    #[inline]
    pub(crate) fn index_at(&self, sx: i32, sz: i32, slevel: i32) -> usize {
        debug_assert!(sx >= 0 && sz >= 0 && slevel >= 0);
        debug_assert!(sx < self.width as i32 && sz < self.height as i32 && slevel < self.levels as i32);
        self.raw_index(sx as usize, sz as usize, slevel as usize)
    }

    #[inline]
    fn raw_index(&self, sx: usize, sz: usize, slevel: usize) -> usize {
        let w = self.width as usize;
        let h = self.height as usize;
        sx + sz * w + slevel * w * h
    }

    #[inline]
    pub fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    #[inline]
    pub fn tile_at(&self, coord: TileCoord) -> &Tile {
        &self.tiles[self.index(coord)]
    }

    #[inline]
    pub(crate) fn tile_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    #[inline]
    pub(crate) fn tile_at_mut(&mut self, coord: TileCoord) -> &mut Tile {
        let index = self.index(coord);
        &mut self.tiles[index]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major_per_level() {
        let g = TileGrid::new(4, 3, 2);
        assert_eq!(g.len(), 24);
        assert_eq!(g.index(TileCoord::new(0, 0, 0)), 0);
        assert_eq!(g.index(TileCoord::new(3, 0, 0)), 3);
        assert_eq!(g.index(TileCoord::new(0, 1, 0)), 4);
        assert_eq!(g.index(TileCoord::new(1, 2, 1)), 1 + 2 * 4 + 12);
    }

    #[test]
    fn tiles_know_their_address() {
        let g = TileGrid::new(4, 3, 2);
        for (i, t) in g.tiles().iter().enumerate() {
            assert_eq!(g.index(t.coord()), i);
        }
    }

    #[test]
    #[should_panic(expected = "outside 4x3x2 grid")]
    fn out_of_bounds_panics() {
        let g = TileGrid::new(4, 3, 2);
        let _ = g.index(TileCoord::new(4, 0, 0));
    }
}
