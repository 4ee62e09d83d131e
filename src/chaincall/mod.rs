//! One fluent builder per operation kind.
//!
//! Mutating builders ([`Insert`], [`Delete`], [`Update`]) accumulate clauses
//! and run via [`execute`](Delete::execute), which prepares the statement
//! model's current snapshot, steps it exactly once, captures the handle's
//! affected-row count, and finalizes the prepared statement before
//! returning — on the error path too. Re-running `execute` derives a fresh
//! prepared statement from the (possibly further-mutated) model and is fully
//! independent of the previous run.
//!
//! Select-family builders ([`Select`], [`RowSelect`], [`MultiSelect`]) wrap
//! the shared [`Selectable`](crate::cursor::Selectable) cursor and are
//! iterated with `next()` instead of executed.
//!
//! Builders are single-owner objects: build, execute or iterate, discard.
//! One handle backs one builder at a time.

mod delete;
mod insert;
mod multi_select;
mod row_select;
mod select;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use multi_select::MultiSelect;
pub use row_select::RowSelect;
pub use select::Select;
pub use update::Update;

use crate::error::ChainCallError;
use crate::handle::Handle;
use crate::statement::Statement;

// Shared terminal path of the mutating builders: prepare, step once, read
// changes, finalize unconditionally before the outcome surfaces.
fn execute_mutation<H: Handle>(
    handle: &mut H,
    statement: &Statement,
) -> Result<usize, ChainCallError> {
    let mut prepared = handle.prepare(statement)?;
    let stepped = handle.step(&mut prepared);
    handle.finalize(&mut prepared);
    match stepped {
        Ok(_) => {
            let changes = handle.changes();
            tracing::debug!(kind = ?statement.kind(), changes, "executed mutation");
            Ok(changes)
        }
        Err(error) => {
            tracing::debug!(kind = ?statement.kind(), error = %error, "mutation failed");
            Err(error)
        }
    }
}
