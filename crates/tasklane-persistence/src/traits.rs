use tasklane_domain::Board;

/// Storage seam for the board document.
///
/// The board store drives this once per committed state change. Both sides
/// of the contract absorb their own failures: `load` collapses a missing,
/// unreadable, or shape-invalid document into the seed board, and `save`
/// is fire-and-forget. Failures surface only as tracing diagnostics, never
/// to the caller.
pub trait BoardRepository: Send + Sync {
    /// Read the stored board, or the seed board when nothing usable is
    /// stored.
    fn load(&self) -> Board;

    /// Overwrite the stored board wholesale.
    fn save(&self, board: &Board);
}
