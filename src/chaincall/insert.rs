use crate::error::ChainCallError;
use crate::handle::Handle;
use crate::statement::{ConflictPolicy, Statement};

use super::execute_mutation;

/// Chain call for inserting.
///
/// The conflict policy is fixed by the constructor ([`new`](Self::new) aborts
/// on conflict, [`or_replace`](Self::or_replace) replaces,
/// [`or_ignore`](Self::or_ignore) ignores) and cannot change afterward. The
/// rendered statement carries one bindable slot per column; binding values is
/// the engine surface's concern.
pub struct Insert<H: Handle> {
    handle: H,
    statement: Statement,
    changes: Option<usize>,
}

impl<H: Handle> Insert<H> {
    /// Start an insert chain call into `table` on the named columns.
    pub fn new(
        handle: H,
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::with_policy(handle, table, columns, ConflictPolicy::Abort)
    }

    /// Start an insert that replaces conflicting rows.
    pub fn or_replace(
        handle: H,
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::with_policy(handle, table, columns, ConflictPolicy::Replace)
    }

    /// Start an insert that ignores conflicting rows.
    pub fn or_ignore(
        handle: H,
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::with_policy(handle, table, columns, ConflictPolicy::Ignore)
    }

    fn with_policy(
        handle: H,
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
        conflict: ConflictPolicy,
    ) -> Self {
        Self {
            handle,
            statement: Statement::insert(table, columns, conflict),
            changes: None,
        }
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

    /// Execute the insert chain call, returning the affected-row count.
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
