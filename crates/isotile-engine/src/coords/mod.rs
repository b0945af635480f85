//! Coordinate types shared by the grid, the painter and its consumers.
//!
//! Scene tile space:
//! - `sx` grows east, `sz` grows north
//! - `slevel` is the elevation level, 0 at the bottom
//! - all values are relative to the loaded scene, not the world
//!
//! Camera positions use the same axes but are signed, because the camera may
//! sit outside the loaded grid.

mod camera;
mod tile;
mod window;

pub use camera::CameraTile;
pub use tile::TileCoord;
pub use window::DrawWindow;
