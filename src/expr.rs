//! Boundary types for the caller's expression layer.
//!
//! Predicates, orderings, groupings, and limits arrive as already-rendered
//! fragments. This crate stores and forwards them without interpreting their
//! contents; the only thing it ever does with one is splice it into the
//! statement text handed to the engine.

use std::fmt;

/// An opaque expression fragment supplied by the expression layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr(String);

impl Expr {
    /// Wrap an already-rendered expression fragment.
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    /// An expression naming a single column.
    pub fn column(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The rendered form forwarded to the engine.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Expr {
    fn from(fragment: &str) -> Self {
        Self::raw(fragment)
    }
}

impl From<String> for Expr {
    fn from(fragment: String) -> Self {
        Self::raw(fragment)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort direction of one ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One ORDER BY term: an expression with an optional explicit direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingTerm {
    pub expr: Expr,
    pub order: Option<SortOrder>,
}

impl OrderingTerm {
    /// An ordering term with the engine's default direction.
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: None,
        }
    }

    /// An ascending ordering term.
    pub fn asc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Some(SortOrder::Asc),
        }
    }

    /// A descending ordering term.
    pub fn desc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Some(SortOrder::Desc),
        }
    }
}

impl From<Expr> for OrderingTerm {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

/// One projected column of a select-family statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultColumn {
    /// The wildcard marker; expanded by the engine, not at build time.
    All,
    /// A projected expression or column.
    Expr(Expr),
}

impl ResultColumn {
    /// A result column naming a single table column.
    pub fn column(name: impl Into<String>) -> Self {
        Self::Expr(Expr::column(name))
    }
}

impl From<Expr> for ResultColumn {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}

impl From<&str> for ResultColumn {
    fn from(fragment: &str) -> Self {
        Self::Expr(Expr::raw(fragment))
    }
}

/// LIMIT clause forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// `LIMIT count` with an optional `OFFSET`.
    Count { count: i64, offset: Option<i64> },
    /// `LIMIT from, to` range form.
    Range { from: i64, to: i64 },
}
