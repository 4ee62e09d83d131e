use crate::error::ChainCallError;
use crate::expr::{Expr, OrderingTerm};
use crate::handle::Handle;
use crate::statement::Statement;

use super::execute_mutation;

/// Chain call for updating.
///
/// The rendered statement assigns one bindable slot per column
/// (`SET a = ?, b = ?`); binding values is the engine surface's concern.
pub struct Update<H: Handle> {
    handle: H,
    statement: Statement,
    changes: Option<usize>,
}

impl<H: Handle> Update<H> {
    /// Start an update chain call against `table` on the named columns.
    pub fn new(
        handle: H,
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            handle,
            statement: Statement::update(table, columns),
            changes: None,
        }
    }

    /// Replace the predicate.
    pub fn where_(&mut self, condition: impl Into<Expr>) -> &mut Self {
        self.statement.set_predicate(condition.into());
        self
    }

    /// Append ordering terms.
    pub fn order_by(&mut self, terms: impl IntoIterator<Item = OrderingTerm>) -> &mut Self {
        self.statement.append_orderings(terms);
        self
    }

    /// Replace the limit clause.
    pub fn limit(&mut self, count: i64) -> &mut Self {
        self.statement.set_limit(count);
        self
    }

    /// Replace the limit clause with count and offset.
    pub fn limit_offset(&mut self, count: i64, offset: i64) -> &mut Self {
        self.statement.set_limit_offset(count, offset);
        self
    }

    /// Replace the limit clause with the range form.
    pub fn limit_range(&mut self, from: i64, to: i64) -> &mut Self {
        self.statement.set_limit_range(from, to);
        self
    }

    /// The statement model accumulated so far.
    #[must_use]
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Rows affected by the most recent successful execution.
    #[must_use]
    pub fn changes(&self) -> Option<usize> {
        self.changes
    }

    /// Execute the update chain call, returning the affected-row count.
    ///
    /// # Errors
    /// Returns [`ChainCallError::Statement`] if the model cannot be compiled
    /// or [`ChainCallError::Execution`] if stepping fails; either way the
    /// prepared statement is finalized first and [`changes`](Self::changes)
    /// is left unchanged.
    pub fn execute(&mut self) -> Result<usize, ChainCallError> {
        let changes = execute_mutation(&mut self.handle, &self.statement)?;
        self.changes = Some(changes);
        Ok(changes)
    }
}
