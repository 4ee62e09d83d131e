use sql_chaincall::prelude::*;
use sql_chaincall::test_utils::ScriptedHandle;

#[test]
fn independent_clauses_commute() {
    let mut h1 = ScriptedHandle::new();
    let mut h2 = ScriptedHandle::new();

    let mut a = Select::new(&mut h1, "t1", vec![], false);
    a.where_(Expr::raw("x > 0"))
        .unwrap()
        .limit(10)
        .unwrap()
        .group_by([Expr::column("a")])
        .unwrap()
        .having(Expr::raw("count(*) > 1"))
        .unwrap();

    let mut b = Select::new(&mut h2, "t1", vec![], false);
    b.having(Expr::raw("count(*) > 1"))
        .unwrap()
        .group_by([Expr::column("a")])
        .unwrap()
        .limit(10)
        .unwrap()
        .where_(Expr::raw("x > 0"))
        .unwrap();

    assert_eq!(a.statement().sql(), b.statement().sql());
}

#[test]
fn order_by_appends_in_call_order() {
    let mut handle = ScriptedHandle::new();

    let mut select = Select::new(&mut handle, "t1", vec![], false);
    select.order_by([OrderingTerm::asc(Expr::column("a"))]).unwrap();
    select.order_by([OrderingTerm::desc(Expr::column("b"))]).unwrap();

    assert_eq!(select.statement().sql(), "SELECT * FROM t1 ORDER BY a ASC, b DESC");
}

#[test]
fn later_singular_clauses_replace_earlier_ones() {
    let mut handle = ScriptedHandle::new();

    let mut delete = Delete::new(&mut handle, "t1");
    delete.limit(10).limit(20);
    assert_eq!(
        delete.statement().limit(),
        Some(Limit::Count { count: 20, offset: None })
    );

    delete.where_(Expr::raw("a = 1")).where_(Expr::raw("b = 2"));
    assert_eq!(delete.statement().sql(), "DELETE FROM t1 WHERE b = 2 LIMIT 20");

    delete.limit_offset(5, 2);
    assert_eq!(
        delete.statement().limit(),
        Some(Limit::Count { count: 5, offset: Some(2) })
    );

    delete.limit_range(1, 4);
    assert_eq!(delete.statement().limit(), Some(Limit::Range { from: 1, to: 4 }));
}

#[test]
fn statement_mutations_follow_replace_vs_append_rules() {
    let mut statement = Statement::select(["t1"], vec![], false);
    statement.append_groupings([Expr::column("a")]);
    statement.append_groupings([Expr::column("b")]);
    statement.set_having(Expr::raw("sum(x) > 0"));
    statement.set_having(Expr::raw("sum(x) > 5"));

    assert_eq!(statement.sql(), "SELECT * FROM t1 GROUP BY a, b HAVING sum(x) > 5");
}

#[test]
fn render_options_control_placeholders_and_quoting() {
    let statement = Statement::insert("t1", ["a", "b"], ConflictPolicy::Abort);

    let numbered = RenderOptions::default().with_placeholders(PlaceholderStyle::Numbered);
    assert_eq!(
        statement.sql_with(&numbered),
        "INSERT INTO t1(a, b) VALUES($1, $2)"
    );

    let quoted = RenderOptions::default().with_quoted_identifiers();
    assert_eq!(
        statement.sql_with(&quoted),
        "INSERT INTO \"t1\"(\"a\", \"b\") VALUES(?, ?)"
    );
}
