use std::ops::{Deref, DerefMut};

use crate::cursor::Selectable;
use crate::expr::ResultColumn;
use crate::handle::Handle;
use crate::statement::Statement;

/// Chain call for row-selecting: positional result columns over one or more
/// tables, rows read positionally from the engine's row surface.
///
/// Dereferences to the shared [`Selectable`] cursor.
pub struct RowSelect<H: Handle> {
    inner: Selectable<H>,
}

impl<H: Handle> RowSelect<H> {
    /// Start a row select of `columns` from `tables`. An empty column list
    /// selects the wildcard.
    pub fn new(
        handle: H,
        columns: Vec<ResultColumn>,
        tables: impl IntoIterator<Item = impl Into<String>>,
        distinct: bool,
    ) -> Self {
        Self {
            inner: Selectable::new(handle, Statement::select(tables, columns, distinct)),
        }
    }
}

impl<H: Handle> Deref for RowSelect<H> {
    type Target = Selectable<H>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<H: Handle> DerefMut for RowSelect<H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
