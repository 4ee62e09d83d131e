//! Lazy row source shared by the select-family chain calls.

use crate::error::ChainCallError;
use crate::expr::{Expr, OrderingTerm};
use crate::handle::{Handle, StepOutcome};
use crate::statement::Statement;

/// Forward-only, lazily-prepared cursor over a select-style statement.
///
/// The prepared statement is created on the first [`next`](Self::next) call
/// and released exactly once, on whichever comes first: a step error, an
/// explicit [`close`](Self::close), or drop. Natural exhaustion does not
/// finalize by itself; the resource lives until close/drop so the engine's
/// row surface stays valid for the caller.
///
/// Clause methods are valid only before the first `next` call. Once the
/// statement is prepared its text is frozen, so later clause calls fail with
/// [`ChainCallError::LateMutation`] instead of being silently dropped.
///
/// A cursor is a single-owner object: build, iterate, discard. It is not
/// meant for concurrent use from multiple threads.
pub struct Selectable<H: Handle> {
    handle: H,
    statement: Statement,
    prepared: Option<H::Prepared>,
    finalized: bool,
    exhausted: bool,
}

impl<H: Handle> Selectable<H> {
    pub(crate) fn new(handle: H, statement: Statement) -> Self {
        Self {
            handle,
            statement,
            prepared: None,
            finalized: false,
            exhausted: false,
        }
    }

    /// The statement model backing this cursor.
    #[must_use]
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Whether the underlying prepared statement has been released.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn clauses(&mut self) -> Result<&mut Statement, ChainCallError> {
        if self.finalized || self.prepared.is_some() {
            return Err(ChainCallError::LateMutation);
        }
        Ok(&mut self.statement)
    }

    /// Replace the predicate. Callers needing conjunction combine
    /// expressions before calling.
    ///
    /// # Errors
    /// [`ChainCallError::LateMutation`] once the statement is prepared.
    pub fn where_(&mut self, condition: impl Into<Expr>) -> Result<&mut Self, ChainCallError> {
        self.clauses()?.set_predicate(condition.into());
        Ok(self)
    }

    /// Append ordering terms.
    ///
    /// # Errors
    /// [`ChainCallError::LateMutation`] once the statement is prepared.
    pub fn order_by(
        &mut self,
        terms: impl IntoIterator<Item = OrderingTerm>,
    ) -> Result<&mut Self, ChainCallError> {
        self.clauses()?.append_orderings(terms);
        Ok(self)
    }

    /// Append grouping expressions.
    ///
    /// # Errors
    /// [`ChainCallError::LateMutation`] once the statement is prepared.
    pub fn group_by(
        &mut self,
        groups: impl IntoIterator<Item = Expr>,
    ) -> Result<&mut Self, ChainCallError> {
        self.clauses()?.append_groupings(groups);
        Ok(self)
    }

    /// Replace the having predicate.
    ///
    /// # Errors
    /// [`ChainCallError::LateMutation`] once the statement is prepared.
    pub fn having(&mut self, condition: impl Into<Expr>) -> Result<&mut Self, ChainCallError> {
        self.clauses()?.set_having(condition.into());
        Ok(self)
    }

    /// Replace the limit clause.
    ///
    /// # Errors
    /// [`ChainCallError::LateMutation`] once the statement is prepared.
    pub fn limit(&mut self, count: i64) -> Result<&mut Self, ChainCallError> {
        self.clauses()?.set_limit(count);
        Ok(self)
    }

    /// Replace the limit clause with count and offset.
    ///
    /// # Errors
    /// [`ChainCallError::LateMutation`] once the statement is prepared.
    pub fn limit_offset(&mut self, count: i64, offset: i64) -> Result<&mut Self, ChainCallError> {
        self.clauses()?.set_limit_offset(count, offset);
        Ok(self)
    }

    /// Replace the limit clause with the range form.
    ///
    /// # Errors
    /// [`ChainCallError::LateMutation`] once the statement is prepared.
    pub fn limit_range(&mut self, from: i64, to: i64) -> Result<&mut Self, ChainCallError> {
        self.clauses()?.set_limit_range(from, to);
        Ok(self)
    }

    /// Advance to the next row.
    ///
    /// Prepares the statement on first use. Returns `Ok(true)` while a row is
    /// available on the engine's row surface and `Ok(false)` once iteration
    /// is exhausted; repeated calls after exhaustion keep returning
    /// `Ok(false)` without reaching the engine again.
    ///
    /// # Errors
    /// [`ChainCallError::AlreadyFinalized`] after [`close`](Self::close) or a
    /// previous failure; [`ChainCallError::Statement`] if preparation fails;
    /// [`ChainCallError::Execution`] if stepping fails, in which case the
    /// prepared statement is finalized before the error is returned.
    pub fn next(&mut self) -> Result<bool, ChainCallError> {
        if self.finalized {
            return Err(ChainCallError::AlreadyFinalized);
        }
        if self.exhausted {
            return Ok(false);
        }

        if self.prepared.is_none() {
            match self.handle.prepare(&self.statement) {
                Ok(prepared) => {
                    tracing::trace!(kind = ?self.statement.kind(), "prepared cursor statement");
                    self.prepared = Some(prepared);
                }
                Err(error) => {
                    // Nothing to release; the cursor is still spent.
                    self.finalized = true;
                    return Err(error);
                }
            }
        }

        let Some(prepared) = self.prepared.as_mut() else {
            return Err(ChainCallError::AlreadyFinalized);
        };
        match self.handle.step(prepared) {
            Ok(StepOutcome::Row) => Ok(true),
            Ok(StepOutcome::Done) => {
                self.exhausted = true;
                Ok(false)
            }
            Err(error) => {
                tracing::debug!(error = %error, "step failed, finalizing cursor");
                self.release();
                Err(error)
            }
        }
    }

    /// Release the prepared statement now instead of at drop. Idempotent.
    pub fn close(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut prepared) = self.prepared.take() {
            self.handle.finalize(&mut prepared);
            tracing::trace!("finalized cursor statement");
        }
        self.finalized = true;
    }
}

impl<H: Handle> Drop for Selectable<H> {
    fn drop(&mut self) {
        self.release();
    }
}
