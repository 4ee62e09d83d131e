//! Deterministic scripted engine for exercising chain calls in tests.
//!
//! Enabled with the `test-utils` feature. No real engine is involved: each
//! prepare consumes the next queued [`Script`] and the handle records what
//! the chain-call layer did to it, so tests can assert on prepared SQL and
//! on finalize accounting.

use std::collections::VecDeque;

use crate::error::ChainCallError;
use crate::handle::{Handle, StepOutcome};
use crate::statement::Statement;

/// One scripted prepare outcome, consumed front-to-back.
#[derive(Debug, Clone, Copy)]
pub enum Script {
    /// Yield this many rows, then complete.
    Rows(usize),
    /// A mutation affecting this many rows: one step straight to done.
    Changes(usize),
    /// Yield this many rows, then fail the following step.
    FailAfter(usize),
    /// Fail preparation outright.
    PrepareError(&'static str),
}

/// Scripted engine handle.
///
/// Running out of scripts means "zero rows, zero changes". Stepping a
/// statement that was already finalized is reported as an execution error so
/// misuse of the native layer cannot go unnoticed in tests.
#[derive(Debug, Default)]
pub struct ScriptedHandle {
    scripts: VecDeque<Script>,
    prepared_sql: Vec<String>,
    finalize_counts: Vec<usize>,
    changes: usize,
}

/// Prepared-statement token handed out by [`ScriptedHandle`].
#[derive(Debug)]
pub struct ScriptedPrepared {
    id: usize,
    remaining: usize,
    fail_next: bool,
    changes: Option<usize>,
}

impl ScriptedHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next prepare.
    pub fn push(&mut self, script: Script) {
        self.scripts.push_back(script);
    }

    /// SQL text of every statement prepared so far, in prepare order.
    #[must_use]
    pub fn prepared_sql(&self) -> &[String] {
        &self.prepared_sql
    }

    /// Finalize call count per prepared statement, in prepare order.
    #[must_use]
    pub fn finalize_counts(&self) -> &[usize] {
        &self.finalize_counts
    }
}

impl Handle for ScriptedHandle {
    type Prepared = ScriptedPrepared;

    fn prepare(&mut self, statement: &Statement) -> Result<ScriptedPrepared, ChainCallError> {
        let script = self.scripts.pop_front().unwrap_or(Script::Rows(0));
        let (remaining, fail_next, changes) = match script {
            Script::PrepareError(message) => {
                return Err(ChainCallError::Statement(message.to_owned()));
            }
            Script::Rows(rows) => (rows, false, None),
            Script::Changes(changes) => (0, false, Some(changes)),
            Script::FailAfter(rows) => (rows, true, None),
        };
        let id = self.finalize_counts.len();
        self.finalize_counts.push(0);
        self.prepared_sql.push(statement.sql());
        Ok(ScriptedPrepared {
            id,
            remaining,
            fail_next,
            changes,
        })
    }

    fn step(&mut self, prepared: &mut ScriptedPrepared) -> Result<StepOutcome, ChainCallError> {
        if self
            .finalize_counts
            .get(prepared.id)
            .is_some_and(|&count| count > 0)
        {
            return Err(ChainCallError::Execution("step after finalize".to_owned()));
        }
        if prepared.remaining > 0 {
            prepared.remaining -= 1;
            return Ok(StepOutcome::Row);
        }
        if prepared.fail_next {
            return Err(ChainCallError::Execution("scripted step failure".to_owned()));
        }
        if let Some(changes) = prepared.changes {
            self.changes = changes;
        }
        Ok(StepOutcome::Done)
    }

    fn finalize(&mut self, prepared: &mut ScriptedPrepared) {
        if let Some(count) = self.finalize_counts.get_mut(prepared.id) {
            *count += 1;
        }
    }

    fn changes(&self) -> usize {
        self.changes
    }
}
