//! Convenient imports for common functionality.

pub use crate::chaincall::{Delete, Insert, MultiSelect, RowSelect, Select, Update};
pub use crate::cursor::Selectable;
pub use crate::error::ChainCallError;
pub use crate::expr::{Expr, Limit, OrderingTerm, ResultColumn, SortOrder};
pub use crate::handle::{Handle, StepOutcome};
pub use crate::statement::{
    ConflictPolicy, PlaceholderStyle, RenderOptions, Statement, StatementKind,
};
pub use crate::sync::{OnceRegistry, run_once};
