use crate::coords::TileCoord;
use crate::grid::EntityId;

/// One entry of the back-to-front command stream.
///
/// The painter only decides ordering. The rasterizer resolves `Terrain` against
/// its terrain mesh for that tile and `Element` against its own model and
/// position table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawCmd {
    /// Terrain of the tile at `(sx, sz)` taken from level `slevel`.
    Terrain(TileCoord),
    /// A registered element, identified by the entity id it was registered with.
    Element(EntityId),
}

impl DrawCmd {
    #[inline]
    pub const fn terrain(sx: u16, sz: u16, slevel: u8) -> Self {
        DrawCmd::Terrain(TileCoord::new(sx, sz, slevel))
    }

    #[inline]
    pub const fn element(entity: u32) -> Self {
        DrawCmd::Element(EntityId(entity))
    }
}
