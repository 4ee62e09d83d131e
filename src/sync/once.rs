//! Run-once-by-name registry.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::locks::SpinLock;

/// Tracks initializer names that have already run.
///
/// The block executes while the registry lock is held, so racing threads
/// serialize against each other and a name's block runs at most once for the
/// life of the registry — including threads racing on different names. The
/// set grows monotonically; a block that panics is not recorded and may be
/// retried.
///
/// Process-wide callers go through [`run_once`]; tests construct their own
/// registry to stay isolated.
#[derive(Debug, Default)]
pub struct OnceRegistry {
    tracker: SpinLock<HashSet<String>>,
}

impl OnceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `block` unless `name` has already run against this registry.
    pub fn run_once(&self, name: &str, block: impl FnOnce()) {
        let mut tracker = self.tracker.lock();
        if tracker.contains(name) {
            return;
        }
        block();
        tracker.insert(name.to_owned());
    }

    /// Whether `name` has already run.
    #[must_use]
    pub fn has_run(&self, name: &str) -> bool {
        self.tracker.lock().contains(name)
    }
}

static GLOBAL: LazyLock<OnceRegistry> = LazyLock::new(OnceRegistry::new);

/// The process-wide registry behind [`run_once`].
#[must_use]
pub fn global() -> &'static OnceRegistry {
    &GLOBAL
}

/// Run `block` at most once process-wide for `name`.
///
/// ```rust
/// let mut ran = 0;
/// sql_chaincall::sync::run_once("doctest-init", || ran += 1);
/// sql_chaincall::sync::run_once("doctest-init", || ran += 1);
/// assert_eq!(ran, 1);
/// ```
pub fn run_once(name: &str, block: impl FnOnce()) {
    GLOBAL.run_once(name, block);
}

#[cfg(test)]
mod tests {
    use super::OnceRegistry;

    #[test]
    fn registries_are_isolated() {
        let first = OnceRegistry::new();
        let second = OnceRegistry::new();
        let mut runs = 0;
        first.run_once("shared-name", || runs += 1);
        second.run_once("shared-name", || runs += 1);
        assert_eq!(runs, 2);
        assert!(first.has_run("shared-name"));
        assert!(!first.has_run("other-name"));
    }
}
