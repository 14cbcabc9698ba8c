//! Undo transaction bracketing.

/// Groups document mutations into one undoable unit.
pub trait TransactionBoundary {
    fn open(&mut self);
    fn close(&mut self);
}

/// Counts transaction nesting and completed undo units.
///
/// Nested opens fold into the outermost transaction; only closing the
/// outermost one commits a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    depth: usize,
    committed: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transaction is currently open.
    pub fn is_open(&self) -> bool {
        self.depth > 0
    }

    /// Number of undo units committed so far.
    pub fn committed(&self) -> usize {
        self.committed
    }
}

impl TransactionBoundary for History {
    fn open(&mut self) {
        self.depth += 1;
    }

    fn close(&mut self) {
        if self.depth == 0 {
            log::warn!("Ignoring close of a transaction that was never opened");
            return;
        }
        self.depth -= 1;
        if self.depth == 0 {
            self.committed += 1;
        }
    }
}
