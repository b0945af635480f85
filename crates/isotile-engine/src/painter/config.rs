use crate::grid::MAX_LEVELS;

/// Painter tuning.
///
/// ```
/// use isotile_engine::painter::PainterConfig;
///
/// let config = PainterConfig::default()
///     .with_draw_radius(16)
///     .with_max_visible_level(1);
/// assert_eq!(config.draw_radius, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PainterConfig {
    /// Visibility window half-size in tiles. The window spans
    /// `[camera - radius, camera + radius)` on each axis.
    pub draw_radius: i32,
    /// Tiles whose draw level is above this are finalized without drawing.
    pub max_visible_level: u8,
    /// Entries each work queue can hold. `None` sizes the queues from the grid.
    pub queue_capacity: Option<usize>,
}

impl PainterConfig {
    pub const DEFAULT_DRAW_RADIUS: i32 = 25;

    pub fn with_draw_radius(mut self, radius: i32) -> Self {
        self.draw_radius = radius;
        self
    }

    pub fn with_max_visible_level(mut self, level: u8) -> Self {
        self.max_visible_level = level;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.draw_radius > 0, "draw radius must be positive, got {}", self.draw_radius);
        if let Some(capacity) = self.queue_capacity {
            anyhow::ensure!(capacity > 0, "queue capacity must be positive");
        }
        Ok(())
    }

    /// Queue capacity for a grid of `tile_count` tiles.
    pub(crate) fn resolved_queue_capacity(&self, tile_count: usize) -> usize {
        self.queue_capacity.unwrap_or_else(|| (tile_count * 8).max(512))
    }
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            draw_radius: Self::DEFAULT_DRAW_RADIUS,
            max_visible_level: MAX_LEVELS - 1,
            queue_capacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_every_level() {
        let c = PainterConfig::default();
        assert_eq!(c.draw_radius, 25);
        assert_eq!(c.max_visible_level, 3);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(PainterConfig::default().with_draw_radius(0).validate().is_err());
        assert!(PainterConfig::default().with_draw_radius(-3).validate().is_err());
    }

    #[test]
    fn rejects_zero_queue() {
        assert!(PainterConfig::default().with_queue_capacity(0).validate().is_err());
    }

    #[test]
    fn queue_capacity_scales_with_grid() {
        let c = PainterConfig::default();
        assert_eq!(c.resolved_queue_capacity(10), 512);
        assert_eq!(c.resolved_queue_capacity(1000), 8000);
        assert_eq!(c.with_queue_capacity(64).resolved_queue_capacity(1000), 64);
    }
}
