//! Command stream types.
//!
//! Responsibilities:
//! - describe what the rasterizer draws, never how (no geometry, only ordering)
//! - keep commands fixed-size so the stream can be uploaded or walked cheaply
//! - reuse storage across frames

mod buffer;
mod cmd;
mod packed;

pub use buffer::CommandBuffer;
pub use cmd::DrawCmd;
pub use packed::PackedCmd;
