//! Lock toolkit and the process-wide run-once registry.

mod locks;
mod once;

pub use locks::{ConditionLock, Mutex, SpinLock, SpinLockGuard};
pub use once::{OnceRegistry, global, run_once};
