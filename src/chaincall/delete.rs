use crate::error::ChainCallError;
use crate::expr::{Expr, OrderingTerm};
use crate::handle::Handle;
use crate::statement::Statement;

use super::execute_mutation;

/// Chain call for deleting.
///
/// ```rust
/// use sql_chaincall::prelude::*;
/// use sql_chaincall::test_utils::{Script, ScriptedHandle};
///
/// let mut handle = ScriptedHandle::default();
/// handle.push(Script::Changes(1));
///
/// let mut delete = Delete::new(&mut handle, "players");
/// delete.where_(Expr::raw("id = 5")).limit(1);
/// assert_eq!(delete.execute()?, 1);
/// # Ok::<(), sql_chaincall::ChainCallError>(())
/// ```
pub struct Delete<H: Handle> {
    handle: H,
    statement: Statement,
    changes: Option<usize>,
}

impl<H: Handle> Delete<H> {
    /// Start a delete chain call against `table`.
    pub fn new(handle: H, table: impl Into<String>) -> Self {
        Self {
            handle,
            statement: Statement::delete(table),
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

    /// Execute the delete chain call, returning the affected-row count.
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
