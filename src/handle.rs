//! Connection-layer contract consumed by builders and cursors.

use crate::error::ChainCallError;
use crate::statement::Statement;

/// Outcome of stepping a prepared statement once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A result row is available on the engine's row surface.
    Row,
    /// The statement has run to completion.
    Done,
}

impl StepOutcome {
    #[must_use]
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row)
    }
}

/// A connection-like resource able to prepare, step, and finalize statements.
///
/// Implementations come from the caller's connection layer; this crate never
/// constructs one, and a single handle backs a single chain call at a time.
/// Thread-safety is whatever the implementation documents — builders neither
/// strengthen nor weaken it.
///
/// `prepare` failures surface as [`ChainCallError::Statement`] and `step`
/// failures as [`ChainCallError::Execution`]. `finalize` must be idempotent:
/// builders call it exactly once per prepared statement, but an engine must
/// tolerate redundant calls on its own surface.
pub trait Handle {
    /// Engine-scoped compiled form of one statement snapshot.
    type Prepared;

    /// Compile the statement model's current state.
    ///
    /// # Errors
    /// Returns [`ChainCallError::Statement`] if the model cannot be compiled.
    fn prepare(&mut self, statement: &Statement) -> Result<Self::Prepared, ChainCallError>;

    /// Advance the prepared statement by one row.
    ///
    /// # Errors
    /// Returns [`ChainCallError::Execution`] if the engine reports a fault.
    fn step(&mut self, prepared: &mut Self::Prepared) -> Result<StepOutcome, ChainCallError>;

    /// Release the prepared statement.
    fn finalize(&mut self, prepared: &mut Self::Prepared);

    /// Rows affected by the most recent mutation on this handle.
    fn changes(&self) -> usize;
}

// Lets callers lend a handle to a builder without giving up ownership.
impl<H: Handle + ?Sized> Handle for &mut H {
    type Prepared = H::Prepared;

    fn prepare(&mut self, statement: &Statement) -> Result<Self::Prepared, ChainCallError> {
        (**self).prepare(statement)
    }

    fn step(&mut self, prepared: &mut Self::Prepared) -> Result<StepOutcome, ChainCallError> {
        (**self).step(prepared)
    }

    fn finalize(&mut self, prepared: &mut Self::Prepared) {
        (**self).finalize(prepared);
    }

    fn changes(&self) -> usize {
        (**self).changes()
    }
}
