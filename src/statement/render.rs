//! SQL text assembly for statement models.
//!
//! Rendering splices caller-supplied expression fragments verbatim; the only
//! text this module generates itself is keywords, identifiers, and the
//! bindable slots of insert/update column lists.

use std::fmt::Write;

use super::{ConflictPolicy, Statement, StatementKind};
use crate::expr::{Limit, ResultColumn, SortOrder};

/// Placeholder style used for bindable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// SQLite-style `?` placeholders.
    #[default]
    Question,
    /// PostgreSQL-style `$1` placeholders.
    Numbered,
}

/// Options controlling statement rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub placeholders: PlaceholderStyle,
    pub quote_identifiers: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn with_placeholders(mut self, placeholders: PlaceholderStyle) -> Self {
        self.placeholders = placeholders;
        self
    }

    #[must_use]
    pub fn with_quoted_identifiers(mut self) -> Self {
        self.quote_identifiers = true;
        self
    }
}

pub(super) fn render(statement: &Statement, options: &RenderOptions) -> String {
    let mut sql = String::new();
    match statement.kind() {
        StatementKind::Insert => render_insert(statement, options, &mut sql),
        StatementKind::Delete => render_delete(statement, options, &mut sql),
        StatementKind::Update => render_update(statement, options, &mut sql),
        StatementKind::Select | StatementKind::MultiSelect => {
            render_select(statement, options, &mut sql);
        }
    }
    sql
}

fn render_insert(statement: &Statement, options: &RenderOptions, sql: &mut String) {
    sql.push_str(match statement.conflict_policy() {
        ConflictPolicy::Abort => "INSERT",
        ConflictPolicy::Replace => "INSERT OR REPLACE",
        ConflictPolicy::Ignore => "INSERT OR IGNORE",
    });
    sql.push_str(" INTO ");
    push_tables(statement, options, sql);

    let columns = statement.columns();
    if columns.is_empty() {
        sql.push_str(" DEFAULT VALUES");
        return;
    }

    sql.push('(');
    push_joined(sql, columns.iter().map(|column| column_name(column, options)));
    sql.push_str(") VALUES(");
    push_joined(sql, (1..=columns.len()).map(|slot| placeholder(slot, options)));
    sql.push(')');
}

fn render_delete(statement: &Statement, options: &RenderOptions, sql: &mut String) {
    sql.push_str("DELETE FROM ");
    push_tables(statement, options, sql);
    push_predicate(statement, sql);
    push_orderings(statement, sql);
    push_limit(statement, sql);
}

fn render_update(statement: &Statement, options: &RenderOptions, sql: &mut String) {
    sql.push_str("UPDATE ");
    push_tables(statement, options, sql);
    sql.push_str(" SET ");
    push_joined(
        sql,
        statement.columns().iter().enumerate().map(|(index, column)| {
            format!(
                "{} = {}",
                column_name(column, options),
                placeholder(index + 1, options)
            )
        }),
    );
    push_predicate(statement, sql);
    push_orderings(statement, sql);
    push_limit(statement, sql);
}

fn render_select(statement: &Statement, options: &RenderOptions, sql: &mut String) {
    sql.push_str("SELECT ");
    if statement.is_distinct() {
        sql.push_str("DISTINCT ");
    }
    let columns = statement.columns();
    if columns.is_empty() {
        sql.push('*');
    } else {
        push_joined(
            sql,
            columns.iter().map(|column| match column {
                ResultColumn::All => "*".to_owned(),
                ResultColumn::Expr(expr) => expr.as_str().to_owned(),
            }),
        );
    }
    sql.push_str(" FROM ");
    push_tables(statement, options, sql);
    push_predicate(statement, sql);

    if !statement.groupings().is_empty() {
        sql.push_str(" GROUP BY ");
        push_joined(
            sql,
            statement.groupings().iter().map(|g| g.as_str().to_owned()),
        );
        if let Some(having) = statement.having() {
            sql.push_str(" HAVING ");
            sql.push_str(having.as_str());
        }
    }

    push_orderings(statement, sql);
    push_limit(statement, sql);
}

fn push_tables(statement: &Statement, options: &RenderOptions, sql: &mut String) {
    push_joined(
        sql,
        statement.tables().iter().map(|table| ident(table, options)),
    );
}

fn push_predicate(statement: &Statement, sql: &mut String) {
    if let Some(predicate) = statement.predicate() {
        sql.push_str(" WHERE ");
        sql.push_str(predicate.as_str());
    }
}

fn push_orderings(statement: &Statement, sql: &mut String) {
    if statement.orderings().is_empty() {
        return;
    }
    sql.push_str(" ORDER BY ");
    push_joined(
        sql,
        statement.orderings().iter().map(|term| {
            let mut rendered = term.expr.as_str().to_owned();
            match term.order {
                Some(SortOrder::Asc) => rendered.push_str(" ASC"),
                Some(SortOrder::Desc) => rendered.push_str(" DESC"),
                None => {}
            }
            rendered
        }),
    );
}

fn push_limit(statement: &Statement, sql: &mut String) {
    match statement.limit() {
        Some(Limit::Count { count, offset }) => {
            let _ = write!(sql, " LIMIT {count}");
            if let Some(offset) = offset {
                let _ = write!(sql, " OFFSET {offset}");
            }
        }
        Some(Limit::Range { from, to }) => {
            let _ = write!(sql, " LIMIT {from}, {to}");
        }
        None => {}
    }
}

fn push_joined(sql: &mut String, items: impl IntoIterator<Item = String>) {
    let mut first = true;
    for item in items {
        if first {
            first = false;
        } else {
            sql.push_str(", ");
        }
        sql.push_str(&item);
    }
}

fn ident(name: &str, options: &RenderOptions) -> String {
    if options.quote_identifiers {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_owned()
    }
}

// Insert/update column lists are built from plain names, so identifier
// quoting applies; select projections stay verbatim fragments.
fn column_name(column: &ResultColumn, options: &RenderOptions) -> String {
    match column {
        ResultColumn::All => "*".to_owned(),
        ResultColumn::Expr(expr) => ident(expr.as_str(), options),
    }
}

fn placeholder(slot: usize, options: &RenderOptions) -> String {
    match options.placeholders {
        PlaceholderStyle::Question => "?".to_owned(),
        PlaceholderStyle::Numbered => format!("${slot}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Expr, OrderingTerm};

    #[test]
    fn delete_with_clauses() {
        let mut statement = Statement::delete("t1");
        statement.set_predicate(Expr::raw("id = 5"));
        statement.append_orderings([OrderingTerm::desc(Expr::column("id"))]);
        statement.set_limit(1);
        assert_eq!(statement.sql(), "DELETE FROM t1 WHERE id = 5 ORDER BY id DESC LIMIT 1");
    }

    #[test]
    fn insert_conflict_and_default_values() {
        let statement = Statement::insert("t1", ["a", "b"], ConflictPolicy::Ignore);
        assert_eq!(statement.sql(), "INSERT OR IGNORE INTO t1(a, b) VALUES(?, ?)");

        let empty = Statement::insert("t1", Vec::<String>::new(), ConflictPolicy::Abort);
        assert_eq!(empty.sql(), "INSERT INTO t1 DEFAULT VALUES");
    }

    #[test]
    fn update_numbered_placeholders() {
        let mut statement = Statement::update("t1", ["a", "b"]);
        statement.set_predicate(Expr::raw("id = $3"));
        let options = RenderOptions::default().with_placeholders(PlaceholderStyle::Numbered);
        assert_eq!(
            statement.sql_with(&options),
            "UPDATE t1 SET a = $1, b = $2 WHERE id = $3"
        );
    }

    #[test]
    fn select_full_clause_set() {
        let mut statement = Statement::select(["t1"], vec![], false);
        statement.set_predicate(Expr::raw("x > 0"));
        statement.append_groupings([Expr::column("a"), Expr::column("b")]);
        statement.set_having(Expr::raw("count(*) > 1"));
        statement.append_orderings([
            OrderingTerm::asc(Expr::column("a")),
            OrderingTerm::new(Expr::column("b")),
        ]);
        statement.set_limit_offset(10, 5);
        assert_eq!(
            statement.sql(),
            "SELECT * FROM t1 WHERE x > 0 GROUP BY a, b HAVING count(*) > 1 \
             ORDER BY a ASC, b LIMIT 10 OFFSET 5"
        );
    }

    #[test]
    fn range_limit_and_quoting() {
        let mut statement = Statement::select(["my table", "t2"], vec![], true);
        statement.set_limit_range(2, 8);
        let options = RenderOptions::default().with_quoted_identifiers();
        assert_eq!(
            statement.sql_with(&options),
            "SELECT DISTINCT * FROM \"my table\", \"t2\" LIMIT 2, 8"
        );
    }
}
