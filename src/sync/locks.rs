//! Small lock toolkit guarding shared mutable registries.

use std::sync::{Condvar, Mutex as StdMutex, MutexGuard};
use std::time::Duration;

/// Blocking mutual exclusion.
///
/// A panic while a guard is held leaves the protected data as the panicking
/// thread last saw it; later lockers get that data back instead of an error.
#[derive(Debug, Default)]
pub struct Mutex<T> {
    inner: StdMutex<T>,
}

impl<T> Mutex<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: StdMutex::new(value),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Guard returned by [`SpinLock::lock`].
pub type SpinLockGuard<'a, T> = parking_lot::MutexGuard<'a, T>;

/// Adaptive lock for very short critical sections.
///
/// Spins briefly before parking the thread; on platforms without an
/// efficient spin primitive this degenerates to a plain blocking lock, which
/// is an implementation detail and not part of the contract.
#[derive(Debug, Default)]
pub struct SpinLock<T> {
    inner: parking_lot::Mutex<T>,
}

impl<T> SpinLock<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: parking_lot::Mutex::new(value),
        }
    }

    pub fn lock(&self) -> SpinLockGuard<'_, T> {
        self.inner.lock()
    }
}

/// Mutex paired with a condition variable (monitor pattern).
///
/// `wait` returns when signaled or spuriously; `wait_timeout` additionally
/// returns once the duration elapses. Either way the caller re-checks its
/// predicate after waking.
#[derive(Debug, Default)]
pub struct ConditionLock<T> {
    mutex: StdMutex<T>,
    cond: Condvar,
}

impl<T> ConditionLock<T> {
    pub fn new(value: T) -> Self {
        Self {
            mutex: StdMutex::new(value),
            cond: Condvar::new(),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        match self.mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Block until signaled. The guard must come from this lock.
    pub fn wait<'a>(&self, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T> {
        match self.cond.wait(guard) {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Block until signaled or until `timeout` elapses, whichever first.
    pub fn wait_timeout<'a>(
        &self,
        guard: MutexGuard<'a, T>,
        timeout: Duration,
    ) -> MutexGuard<'a, T> {
        match self.cond.wait_timeout(guard, timeout) {
            Ok((guard, _)) => guard,
            Err(poisoned) => poisoned.into_inner().0,
        }
    }

    /// Wake one waiting thread.
    pub fn signal(&self) {
        self.cond.notify_one();
    }

    /// Wake every waiting thread.
    pub fn broadcast(&self) {
        self.cond.notify_all();
    }
}
