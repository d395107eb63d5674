//! Spin lock protecting shared search results.
//!
//! Commit critical sections are short (a compare-and-store, or an amortized
//! buffer append) and contain no I/O, so spinning is cheaper than parking
//! the thread on a full mutex.

use std::cell::UnsafeCell;
use std::hint;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

/// A minimal test-and-test-and-set spin lock.
///
/// Acquiring returns an RAII guard with exclusive access to the protected
/// value; the lock is released when the guard drops, which covers early
/// returns and error paths in commit code.
pub struct SpinLock<T> {
    locked: AtomicBool,
    value: UnsafeCell<T>,
}

// SAFETY: the lock serializes all access to `value`; a reference to the
// inner value is only handed out through a held guard.
unsafe impl<T: Send> Sync for SpinLock<T> {}
unsafe impl<T: Send> Send for SpinLock<T> {}

impl<T> SpinLock<T> {
    /// Create an unlocked spin lock wrapping `value`.
    pub const fn new(value: T) -> Self {
        Self {
            locked: AtomicBool::new(false),
            value: UnsafeCell::new(value),
        }
    }

    /// Acquire the lock, spinning until it is free.
    pub fn lock(&self) -> SpinGuard<'_, T> {
        loop {
            if self
                .locked
                .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
                .is_ok()
            {
                return SpinGuard {
                    lock: self,
                    _not_send: PhantomData,
                };
            }
            // Wait on plain loads so the cache line stays shared while the
            // lock is held by another thread.
            while self.locked.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
    }

    /// Consume the lock and return the protected value.
    ///
    /// Requires ownership, so no guard can be outstanding.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

/// Exclusive access to the value behind a [`SpinLock`].
pub struct SpinGuard<'a, T> {
    lock: &'a SpinLock<T>,
    // Opts out of the auto traits: a guard must not be shared across threads
    // unless the inner value itself is shareable (impl below), and never
    // sent, so the release always happens on the acquiring thread.
    _not_send: PhantomData<*mut ()>,
}

// SAFETY: a shared guard only hands out `&T`, which may alias across
// threads exactly when `T: Sync`. Same bounds as `std::sync::MutexGuard`.
unsafe impl<T: Sync> Sync for SpinGuard<'_, T> {}

impl<T> Deref for SpinGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: the guard holds the lock.
        unsafe { &*self.lock.value.get() }
    }
}

impl<T> DerefMut for SpinGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: the guard holds the lock.
        unsafe { &mut *self.lock.value.get() }
    }
}

impl<T> Drop for SpinGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_lock_provides_exclusive_mutation() {
        let lock = SpinLock::new(0u64);
        let threads = 8u64;
        let increments = 1000u64;

        thread::scope(|scope| {
            for _ in 0..threads {
                scope.spawn(|| {
                    for _ in 0..increments {
                        let mut value = lock.lock();
                        *value += 1;
                    }
                });
            }
        });

        assert_eq!(lock.into_inner(), threads * increments);
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = SpinLock::new(5);

        {
            let mut guard = lock.lock();
            *guard = 7;
        }

        // Re-acquiring succeeds because the first guard released the lock.
        assert_eq!(*lock.lock(), 7);
    }

    /// A held guard may be shared for concurrent reads when the inner value
    /// is itself shareable; guards of non-`Sync` values (e.g. `Cell`) are
    /// rejected at compile time, like `std::sync::MutexGuard`.
    #[test]
    fn test_shared_guard_reads_sync_value() {
        let lock = SpinLock::new(41u64);
        let guard = lock.lock();

        thread::scope(|scope| {
            let guard = &guard;
            scope.spawn(move || {
                assert_eq!(**guard, 41);
            });
        });

        drop(guard);
        assert_eq!(lock.into_inner(), 41);
    }

    #[test]
    fn test_into_inner_returns_value() {
        let lock = SpinLock::new(vec![1, 2, 3]);
        assert_eq!(lock.into_inner(), vec![1, 2, 3]);
    }
}
