//! Static scene geometry consumed by the painter.
//!
//! Responsibilities:
//! - the fixed 3D tile grid and its per-tile slots
//! - the append-only element table
//! - direction and state flags shared by both
//!
//! Both are written only through `Painter` registration calls and are read-only
//! while a paint pass runs.

mod element;
mod flags;
mod table;
mod tile;
mod tile_grid;

pub use element::{
    Element, ElementId, ElementKind, EntityId, GroundDecor, GroundObject, GroundObjectLayer, Scenery,
    Wall, WallDecor, WallSlot,
};
pub use flags::{SpanFlags, ThroughWallFlags, TileFlags, WallSide};
pub use table::ElementTable;
pub use tile::{MAX_SCENERY_PER_TILE, Tile};
pub use tile_grid::{MAX_GRID_EXTENT, MAX_LEVELS, TileGrid};
