use sql_chaincall::prelude::*;
use sql_chaincall::test_utils::{Script, ScriptedHandle};

#[test]
fn delete_executes_and_reports_changes() {
    let mut handle = ScriptedHandle::new();
    handle.push(Script::Changes(1));

    let mut delete = Delete::new(&mut handle, "t1");
    delete.where_(Expr::raw("id = 5")).limit(1);
    assert_eq!(delete.changes(), None);
    assert_eq!(delete.execute().unwrap(), 1);
    assert_eq!(delete.changes(), Some(1));
    drop(delete);

    assert_eq!(handle.prepared_sql()[0], "DELETE FROM t1 WHERE id = 5 LIMIT 1");
    assert_eq!(handle.finalize_counts(), &[1][..]);
}

#[test]
fn re_execution_is_independent() {
    let mut handle = ScriptedHandle::new();
    handle.push(Script::Changes(1));
    handle.push(Script::Changes(0));

    let mut delete = Delete::new(&mut handle, "t1");
    delete.where_(Expr::raw("id = 5"));
    assert_eq!(delete.execute().unwrap(), 1);
    assert_eq!(delete.execute().unwrap(), 0);
    assert_eq!(delete.changes(), Some(0));
    drop(delete);

    // Two full prepare/step/finalize cycles, each released exactly once.
    assert_eq!(handle.prepared_sql().len(), 2);
    assert_eq!(handle.finalize_counts(), &[1, 1][..]);
}

#[test]
fn failed_execute_finalizes_and_keeps_changes() {
    let mut handle = ScriptedHandle::new();
    handle.push(Script::Changes(2));
    handle.push(Script::FailAfter(0));

    let mut update = Update::new(&mut handle, "t1", ["a"]);
    update.where_(Expr::raw("id = 1"));
    assert_eq!(update.execute().unwrap(), 2);

    let error = update.execute().unwrap_err();
    assert!(matches!(error, ChainCallError::Execution(_)));
    assert_eq!(update.changes(), Some(2));
    drop(update);

    assert_eq!(handle.prepared_sql()[1], "UPDATE t1 SET a = ? WHERE id = 1");
    assert_eq!(handle.finalize_counts(), &[1, 1][..]);
}

#[test]
fn prepare_error_surfaces_without_a_finalize() {
    let mut handle = ScriptedHandle::new();
    handle.push(Script::PrepareError("no such column: nope"));

    let mut delete = Delete::new(&mut handle, "t1");
    let error = delete.execute().unwrap_err();
    assert!(matches!(error, ChainCallError::Statement(_)));
    assert_eq!(delete.changes(), None);
    drop(delete);

    assert!(handle.finalize_counts().is_empty());
}

#[test]
fn insert_conflict_policy_is_fixed_at_construction() {
    let mut handle = ScriptedHandle::new();
    handle.push(Script::Changes(1));
    handle.push(Script::Changes(1));

    let mut insert = Insert::or_ignore(&mut handle, "t1", ["a", "b"]);
    assert_eq!(insert.statement().conflict_policy(), ConflictPolicy::Ignore);
    insert.execute().unwrap();
    insert.execute().unwrap();
    drop(insert);

    for sql in handle.prepared_sql() {
        assert_eq!(sql, "INSERT OR IGNORE INTO t1(a, b) VALUES(?, ?)");
    }
}

#[test]
fn insert_without_columns_uses_default_values() {
    let mut handle = ScriptedHandle::new();
    handle.push(Script::Changes(1));

    let mut insert = Insert::new(&mut handle, "t1", Vec::<String>::new());
    insert.execute().unwrap();
    drop(insert);

    assert_eq!(handle.prepared_sql()[0], "INSERT INTO t1 DEFAULT VALUES");
}

#[test]
fn clauses_added_between_executions_apply_to_the_next_run() {
    let mut handle = ScriptedHandle::new();
    handle.push(Script::Changes(3));
    handle.push(Script::Changes(1));

    let mut delete = Delete::new(&mut handle, "t1");
    delete.execute().unwrap();
    delete.where_(Expr::raw("id = 9")).limit(1);
    delete.execute().unwrap();
    drop(delete);

    assert_eq!(handle.prepared_sql()[0], "DELETE FROM t1");
    assert_eq!(handle.prepared_sql()[1], "DELETE FROM t1 WHERE id = 9 LIMIT 1");
}
