//! The mutable statement model accumulated by chain-call builders.

mod render;

pub use render::{PlaceholderStyle, RenderOptions};

use crate::expr::{Expr, Limit, OrderingTerm, ResultColumn};

/// Conflict-resolution policy of an insert statement.
///
/// Fixed when the owning builder is constructed; irrelevant to every other
/// operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    #[default]
    Abort,
    Replace,
    Ignore,
}

/// Which operation a statement performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Insert,
    Delete,
    Update,
    Select,
    MultiSelect,
}

/// In-memory description of one pending SQL operation.
///
/// Pure data: mutation methods touch no external resource and never fail.
/// Builders mutate the model freely between executions; every execution
/// derives a fresh prepared statement from the model's current state, so a
/// clause added after one execution is picked up by the next.
///
/// Singular clauses (predicate, having, limit) replace on repeated calls;
/// cumulative clauses (ordering, grouping) append in call order.
#[derive(Debug, Clone)]
pub struct Statement {
    kind: StatementKind,
    tables: Vec<String>,
    columns: Vec<ResultColumn>,
    conflict: ConflictPolicy,
    predicate: Option<Expr>,
    orderings: Vec<OrderingTerm>,
    groupings: Vec<Expr>,
    having: Option<Expr>,
    limit: Option<Limit>,
    distinct: bool,
}

impl Statement {
    fn new(kind: StatementKind, tables: Vec<String>, columns: Vec<ResultColumn>) -> Self {
        Self {
            kind,
            tables,
            columns,
            conflict: ConflictPolicy::default(),
            predicate: None,
            orderings: Vec::new(),
            groupings: Vec::new(),
            having: None,
            limit: None,
            distinct: false,
        }
    }

    /// An insert into `table` on the named columns.
    ///
    /// The rendered statement carries one bindable slot per column; binding
    /// the actual values belongs to the engine's own surface. An empty column
    /// list renders as `DEFAULT VALUES`.
    pub fn insert(
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
        conflict: ConflictPolicy,
    ) -> Self {
        let columns = columns
            .into_iter()
            .map(|name| ResultColumn::column(name))
            .collect();
        let mut statement = Self::new(StatementKind::Insert, vec![table.into()], columns);
        statement.conflict = conflict;
        statement
    }

    /// A delete from `table`.
    pub fn delete(table: impl Into<String>) -> Self {
        Self::new(StatementKind::Delete, vec![table.into()], Vec::new())
    }

    /// An update of the named columns of `table`, one bindable slot each.
    pub fn update(
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let columns = columns
            .into_iter()
            .map(|name| ResultColumn::column(name))
            .collect();
        Self::new(StatementKind::Update, vec![table.into()], columns)
    }

    /// A select over one or more tables.
    ///
    /// An empty column list stands for the wildcard; it is kept as a marker
    /// and expanded by the engine, not at build time.
    pub fn select(
        tables: impl IntoIterator<Item = impl Into<String>>,
        columns: Vec<ResultColumn>,
        distinct: bool,
    ) -> Self {
        let tables = tables.into_iter().map(Into::into).collect();
        let mut statement = Self::new(StatementKind::Select, tables, columns);
        statement.distinct = distinct;
        statement
    }

    /// A select joining several tables.
    pub fn multi_select(
        tables: impl IntoIterator<Item = impl Into<String>>,
        columns: Vec<ResultColumn>,
    ) -> Self {
        let tables = tables.into_iter().map(Into::into).collect();
        Self::new(StatementKind::MultiSelect, tables, columns)
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn columns(&self) -> &[ResultColumn] {
        &self.columns
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict
    }

    pub fn predicate(&self) -> Option<&Expr> {
        self.predicate.as_ref()
    }

    pub fn orderings(&self) -> &[OrderingTerm] {
        &self.orderings
    }

    pub fn groupings(&self) -> &[Expr] {
        &self.groupings
    }

    pub fn having(&self) -> Option<&Expr> {
        self.having.as_ref()
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Replace the predicate. A single slot: the last call wins, and callers
    /// needing conjunction combine expressions before calling.
    pub fn set_predicate(&mut self, condition: Expr) {
        self.predicate = Some(condition);
    }

    /// Append ordering terms, preserving call order across calls.
    pub fn append_orderings(&mut self, terms: impl IntoIterator<Item = OrderingTerm>) {
        self.orderings.extend(terms);
    }

    /// Append grouping expressions, preserving call order across calls.
    pub fn append_groupings(&mut self, groups: impl IntoIterator<Item = Expr>) {
        self.groupings.extend(groups);
    }

    /// Replace the having predicate. Only meaningful alongside grouping.
    pub fn set_having(&mut self, condition: Expr) {
        self.having = Some(condition);
    }

    /// Replace the limit clause with `LIMIT count`.
    pub fn set_limit(&mut self, count: i64) {
        self.limit = Some(Limit::Count {
            count,
            offset: None,
        });
    }

    /// Replace the limit clause with `LIMIT count OFFSET offset`.
    pub fn set_limit_offset(&mut self, count: i64, offset: i64) {
        self.limit = Some(Limit::Count {
            count,
            offset: Some(offset),
        });
    }

    /// Replace the limit clause with the `LIMIT from, to` range form.
    pub fn set_limit_range(&mut self, from: i64, to: i64) {
        self.limit = Some(Limit::Range { from, to });
    }

    /// Replace the conflict policy.
    pub fn set_conflict_policy(&mut self, conflict: ConflictPolicy) {
        self.conflict = conflict;
    }

    /// Render to SQL text with default options.
    #[must_use]
    pub fn sql(&self) -> String {
        self.sql_with(&RenderOptions::default())
    }

    /// Render to SQL text.
    #[must_use]
    pub fn sql_with(&self, options: &RenderOptions) -> String {
        render::render(self, options)
    }
}
