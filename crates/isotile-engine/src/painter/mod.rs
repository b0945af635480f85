//! Painter's-algorithm draw-order scheduler.
//!
//! Responsibilities:
//! - registration of static geometry onto the tile grid
//! - the per-frame traversal that emits a back-to-front command stream
//!
//! Non-responsibilities:
//! - rasterization and culling (consumers of [`CommandBuffer`])
//! - loading map data (the scene builder calls the registration API)

mod config;
mod paint;
mod queue;
mod register;
mod state;
mod stats;


pub use config::PainterConfig;
pub use register::MAX_SCENERY_SIZE;
pub use state::TileStep;
pub use stats::PaintStats;

use anyhow::{Result, ensure};

use crate::coords::{CameraTile, DrawWindow, TileCoord};
use crate::grid::{Element, ElementId, ElementTable, MAX_GRID_EXTENT, MAX_LEVELS, SpanFlags, Tile, TileGrid};
use crate::scene::CommandBuffer;

use paint::PaintPass;
use queue::WorkQueues;
use state::PaintState;

/// Registration state captured by [`Painter::mark_static`].
#[derive(Debug, Clone)]
struct StaticMark {
    element_count: usize,
    spans: Vec<SpanFlags>,
}

/// Owns the tile grid, the element table and the per-pass scratch.
///
/// Geometry is registered once per scene load; [`Painter::paint`] is then
/// called once per frame with the camera tile.
///
/// Performance characteristics:
/// - `paint` allocates nothing once the command buffer and queues have grown
/// - each tile in the window is queued a bounded number of times per pass
#[derive(Debug)]
pub struct Painter {
    config: PainterConfig,
    grid: TileGrid,
    elements: ElementTable,
    state: PaintState,
    queues: WorkQueues,
    buffer: CommandBuffer,
    stats: PaintStats,
    static_mark: Option<StaticMark>,
}

impl Painter {
    /// Creates a painter over an empty `width` x `height` x `levels` grid with
    /// the default configuration.
    pub fn new(width: u16, height: u16, levels: u8) -> Result<Self> {
        Self::with_config(width, height, levels, PainterConfig::default())
    }

    pub fn with_config(width: u16, height: u16, levels: u8, config: PainterConfig) -> Result<Self> {
        ensure!(
            width > 0 && height > 0 && levels > 0,
            "painter grid {width}x{height}x{levels} has no tiles"
        );
        ensure!(
            width <= MAX_GRID_EXTENT && height <= MAX_GRID_EXTENT,
            "painter grid {width}x{height} exceeds {MAX_GRID_EXTENT} tiles per axis"
        );
        ensure!(levels <= MAX_LEVELS, "painter grid has {levels} levels, at most {MAX_LEVELS} supported");
        config.validate()?;

        let grid = TileGrid::new(width, height, levels);
        let queue_capacity = config.resolved_queue_capacity(grid.len());
        log::debug!("painter: {width}x{height}x{levels} grid, queue capacity {queue_capacity}");

        Ok(Self {
            config,
            grid,
            elements: ElementTable::new(),
            state: PaintState::default(),
            queues: WorkQueues::new(queue_capacity),
            buffer: CommandBuffer::new(),
            stats: PaintStats::default(),
            static_mark: None,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    #[inline]
    pub fn levels(&self) -> u8 {
        self.grid.levels()
    }

    #[inline]
    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// # Panics
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn tile_at(&self, coord: TileCoord) -> &Tile {
        self.grid.tile_at(coord)
    }

    /// # Panics
    /// Panics on an id this painter never returned.
    #[inline]
    pub fn element_at(&self, id: ElementId) -> &Element {
        self.elements.get(id)
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Commands from the most recent [`Painter::paint`].
    #[inline]
    pub fn commands(&self) -> &CommandBuffer {
        &self.buffer
    }

    /// Counters from the most recent [`Painter::paint`].
    #[inline]
    pub fn last_stats(&self) -> PaintStats {
        self.stats
    }

    /// Where the most recent pass left `coord`.
    ///
    /// Tiles outside that pass's window read [`TileStep::Ready`].
    pub fn tile_step(&self, coord: TileCoord) -> TileStep {
        self.state.step(self.grid.index(coord))
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Emits the draw order for `camera` and returns it.
    ///
    /// The buffer is cleared first; a camera whose window misses the grid
    /// yields an empty buffer. Painting the same camera twice over unchanged
    /// geometry yields identical output.
    pub fn paint(&mut self, camera: CameraTile) -> &CommandBuffer {
        self.buffer.clear();
        self.queues.clear();
        self.state.reset(self.grid.len(), self.elements.len());
        self.stats = PaintStats::default();

        let window = DrawWindow::around(
            camera.sx,
            camera.sz,
            self.config.draw_radius,
            self.grid.width() as i32,
            self.grid.height() as i32,
        );
        let Some(window) = window else {
            log::trace!("camera {camera:?} sees none of the grid");
            return &self.buffer;
        };

        PaintPass {
            grid: &self.grid,
            elements: &self.elements,
            state: &mut self.state,
            queues: &mut self.queues,
            out: &mut self.buffer,
            stats: &mut self.stats,
            camera,
            window,
            max_visible_level: self.config.max_visible_level,
        }
        .run();

        self.stats.commands = self.buffer.len();
        log::debug!(
            "painted {} commands for camera ({}, {}, {}): {} tiles, {} deferred, {} stale",
            self.stats.commands,
            camera.sx,
            camera.sz,
            camera.slevel,
            self.stats.tiles_processed,
            self.stats.deferrals,
            self.stats.stale_pops,
        );
        &self.buffer
    }
}
