//! Fluent chain-call statement builders and lazy row cursors for
//! prepared-statement SQL engines.
//!
//! Application code builds an operation incrementally against a
//! caller-supplied connection [`Handle`](handle::Handle), then either
//! executes it as a one-shot mutation returning an affected-row count or
//! iterates it as a lazy cursor. The prepared statement behind each chain
//! call is created on first use and released exactly once, whichever way
//! iteration ends: exhaustion, error, explicit close, or drop.
//!
//! ```rust
//! use sql_chaincall::prelude::*;
//! use sql_chaincall::test_utils::{Script, ScriptedHandle};
//!
//! let mut handle = ScriptedHandle::default();
//! handle.push(Script::Rows(3));
//!
//! let mut select = Select::new(&mut handle, "players", vec![], false);
//! select
//!     .where_(Expr::raw("score > 10"))?
//!     .order_by([OrderingTerm::desc(Expr::column("score"))])?;
//!
//! let mut rows = 0;
//! while select.next()? {
//!     rows += 1; // column reads go through the engine's row surface
//! }
//! assert_eq!(rows, 3);
//! # Ok::<(), sql_chaincall::ChainCallError>(())
//! ```

pub mod chaincall;
pub mod cursor;
pub mod error;
pub mod expr;
pub mod handle;
pub mod prelude;
pub mod statement;
pub mod sync;
#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::ChainCallError;
