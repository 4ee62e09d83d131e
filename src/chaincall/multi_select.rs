use std::ops::{Deref, DerefMut};

use crate::cursor::Selectable;
use crate::expr::ResultColumn;
use crate::handle::Handle;
use crate::statement::Statement;

/// Chain call for selecting across several joined tables.
///
/// Dereferences to the shared [`Selectable`] cursor.
pub struct MultiSelect<H: Handle> {
    inner: Selectable<H>,
}

impl<H: Handle> MultiSelect<H> {
    /// Start a multi-table select of `columns` from `tables`.
    pub fn new(
        handle: H,
        columns: Vec<ResultColumn>,
        tables: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            inner: Selectable::new(handle, Statement::multi_select(tables, columns)),
        }
    }
}

impl<H: Handle> Deref for MultiSelect<H> {
    type Target = Selectable<H>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<H: Handle> DerefMut for MultiSelect<H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
