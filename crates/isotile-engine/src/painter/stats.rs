/// Counters for the most recent paint pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PaintStats {
    /// Pops that reached the state machine.
    pub tiles_processed: usize,
    /// Pops skipped because the tile was queued again behind them.
    pub stale_pops: usize,
    /// Tiles sent back to wait, either for far neighbors or for scenery footprints.
    pub deferrals: usize,
    pub commands: usize,
}
