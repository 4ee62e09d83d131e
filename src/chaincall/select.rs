use std::ops::{Deref, DerefMut};

use crate::cursor::Selectable;
use crate::expr::ResultColumn;
use crate::handle::Handle;
use crate::statement::Statement;

/// Chain call for selecting from a single table.
///
/// Dereferences to the shared [`Selectable`] cursor for clause methods and
/// iteration:
///
/// ```rust
/// use sql_chaincall::prelude::*;
/// use sql_chaincall::test_utils::{Script, ScriptedHandle};
///
/// let mut handle = ScriptedHandle::default();
/// handle.push(Script::Rows(2));
///
/// let mut select = Select::new(&mut handle, "players", vec![], false);
/// select.where_(Expr::raw("score > 10"))?.limit(5)?;
/// while select.next()? {
///     // read the current row through the engine's row surface
/// }
/// # Ok::<(), sql_chaincall::ChainCallError>(())
/// ```
pub struct Select<H: Handle> {
    inner: Selectable<H>,
}

impl<H: Handle> Select<H> {
    /// Start a select of `columns` from `table`. An empty column list selects
    /// the wildcard.
    pub fn new(
        handle: H,
        table: impl Into<String>,
        columns: Vec<ResultColumn>,
        distinct: bool,
    ) -> Self {
        Self {
            inner: Selectable::new(handle, Statement::select([table.into()], columns, distinct)),
        }
    }
}

impl<H: Handle> Deref for Select<H> {
    type Target = Selectable<H>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<H: Handle> DerefMut for Select<H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
