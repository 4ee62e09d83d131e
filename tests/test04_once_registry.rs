use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use sql_chaincall::sync::{ConditionLock, Mutex, OnceRegistry, run_once};

#[test]
fn racing_threads_run_block_exactly_once() {
    let registry = OnceRegistry::new();
    let counter = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..50 {
            scope.spawn(|| {
                registry.run_once("shared-init", || {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
            });
        }
    });

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert!(registry.has_run("shared-init"));
}

#[test]
fn fresh_registries_do_not_share_state() {
    let first = OnceRegistry::new();
    let second = OnceRegistry::new();
    let mut runs = 0;

    first.run_once("init", || runs += 1);
    second.run_once("init", || runs += 1);

    assert_eq!(runs, 2);
}

#[test]
fn global_registry_tracks_names_independently() {
    let mut first = 0;
    let mut second = 0;

    run_once("test04-global-a", || first += 1);
    run_once("test04-global-a", || first += 1);
    run_once("test04-global-b", || second += 1);

    assert_eq!((first, second), (1, 1));
}

#[test]
fn condition_lock_signals_a_waiter() {
    let lock = ConditionLock::new(false);

    thread::scope(|scope| {
        scope.spawn(|| {
            let mut ready = lock.lock();
            while !*ready {
                ready = lock.wait(ready);
            }
        });
        scope.spawn(|| {
            let mut ready = lock.lock();
            *ready = true;
            drop(ready);
            lock.signal();
        });
    });
}

#[test]
fn condition_wait_timeout_returns_without_a_signal() {
    let lock = ConditionLock::new(0u32);

    let guard = lock.lock();
    let guard = lock.wait_timeout(guard, Duration::from_millis(10));

    assert_eq!(*guard, 0);
}

#[test]
fn mutex_recovers_after_a_panicking_holder() {
    let mutex = Mutex::new(7);

    let result = thread::scope(|scope| {
        scope
            .spawn(|| {
                let _guard = mutex.lock();
                panic!("poison the lock");
            })
            .join()
    });

    assert!(result.is_err());
    assert_eq!(*mutex.lock(), 7);
}
