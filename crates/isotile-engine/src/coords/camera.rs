/// Camera position in tile units.
///
/// Signed because a camera may legitimately sit outside the loaded grid, in
/// which case the visibility window is clamped (possibly to nothing).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CameraTile {
    pub sx: i32,
    pub sz: i32,
    pub slevel: i32,
}

impl CameraTile {
    #[inline]
    pub const fn new(sx: i32, sz: i32, slevel: i32) -> Self {
        Self { sx, sz, slevel }
    }
}
