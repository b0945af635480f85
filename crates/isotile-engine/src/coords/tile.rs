use core::fmt;

/// Scene-relative tile address.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TileCoord {
    pub sx: u16,
    pub sz: u16,
    pub slevel: u8,
}

impl TileCoord {
    #[inline]
    pub const fn new(sx: u16, sz: u16, slevel: u8) -> Self {
        Self { sx, sz, slevel }
    }

    /// Same column, different level.
    #[inline]
    pub const fn with_level(self, slevel: u8) -> Self {
        Self { slevel, ..self }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.sx, self.sz, self.slevel)
    }
}
