//! Cancellable one-shot timer for the cosmetic generate delay.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

type Shared = Arc<(Mutex<bool>, Condvar)>;

pub struct OneShotTimer {
    delay: Duration,
    shared: Shared,
}

/// Cloneable handle used to cancel a pending timer from anywhere.
#[derive(Clone)]
pub struct TimerHandle {
    shared: Shared,
}

impl TimerHandle {
    pub fn cancel(&self) {
        let (lock, cvar) = &*self.shared;
        let mut cancelled = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *cancelled = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (lock, _) = &*self.shared;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OneShotTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            shared: Arc::new((Mutex::new(false), Condvar::new())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Block until the delay elapses or the timer is cancelled.
    /// Returns `true` when the timer fired.
    pub fn wait(self) -> bool {
        let (lock, cvar) = &*self.shared;
        let guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (cancelled, _) = cvar
            .wait_timeout_while(guard, self.delay, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        !*cancelled
    }

    /// Run `on_fire` once the delay elapses; a cancelled timer skips it.
    pub fn run<T>(self, on_fire: impl FnOnce() -> T) -> Option<T> {
        if self.wait() { Some(on_fire()) } else { None }
    }
}
