/// Square visibility window around the camera, clamped to the grid.
///
/// Half-open on both axes: `[min, max)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawWindow {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl DrawWindow {
    /// Builds the window `[camera - radius, camera + radius)` on each axis,
    /// clamped to a `width` x `height` grid.
    ///
    /// Returns `None` when nothing of the grid is left after clamping.
    pub fn around(camera_sx: i32, camera_sz: i32, radius: i32, width: i32, height: i32) -> Option<Self> {
        let min_x = camera_sx.saturating_sub(radius).clamp(0, width);
        let min_z = camera_sz.saturating_sub(radius).clamp(0, height);
        let max_x = camera_sx.saturating_add(radius).clamp(0, width);
        let max_z = camera_sz.saturating_add(radius).clamp(0, height);

        if min_x >= max_x || min_z >= max_z {
            return None;
        }

        Some(Self { min_x, min_z, max_x, max_z })
    }

    #[inline]
    pub fn contains(self, x: i32, z: i32) -> bool {
        x >= self.min_x && x < self.max_x && z >= self.min_z && z < self.max_z
    }

    #[inline]
    pub fn tile_count(self) -> usize {
        ((self.max_x - self.min_x) * (self.max_z - self.min_z)) as usize
    }

    /// Seed positions in traversal order: (min, min), (min, max), (max, min), (max, max).
    ///
    /// Max coordinates are the last tile inside the window.
    #[inline]
    pub fn corners(self) -> [(i32, i32); 4] {
        let (x1, z1) = (self.max_x - 1, self.max_z - 1);
        [
            (self.min_x, self.min_z),
            (self.min_x, z1),
            (x1, self.min_z),
            (x1, z1),
        ]
    }

    /// Clips an inclusive tile range to the window.
    ///
    /// Returns the clipped `(min_x, min_z, max_x, max_z)`, still inclusive, or
    /// `None` when the range lies entirely outside.
    pub fn clip_inclusive(self, min_x: i32, min_z: i32, max_x: i32, max_z: i32) -> Option<(i32, i32, i32, i32)> {
        let x0 = min_x.max(self.min_x);
        let z0 = min_z.max(self.min_z);
        let x1 = max_x.min(self.max_x - 1);
        let z1 = max_z.min(self.max_z - 1);

        if x0 > x1 || z0 > z1 {
            None
        } else {
            Some((x0, z0, x1, z1))
        }
    }
}
