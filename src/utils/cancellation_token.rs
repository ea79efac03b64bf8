use std::{
    sync::{Condvar, Mutex, PoisonError},
    time::{Duration, Instant},
};

use crate::app::Pacer;

/// A cancellation token shared between the sampling loop and the termination
/// handler.
#[derive(Default)]
pub struct CancellationToken {
    // Set to true once cancelled. Never goes back to false.
    cancelled: Mutex<bool>,
    cvar: Condvar,
}

impl CancellationToken {
    /// Mark the [`CancellationToken`] as cancelled, waking anything that is
    /// currently waiting on it. Cancelling twice does nothing.
    pub fn cancel(&self) {
        let mut guard = self.cancelled.lock().unwrap_or_else(PoisonError::into_inner);

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Returns whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks for `duration` or until cancelled, whichever happens first.
    ///
    /// Returns whether the token is cancelled after waking up.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let mut guard = self.cancelled.lock().unwrap_or_else(PoisonError::into_inner);

        // A deadline past what `Instant` can hold can only end by cancellation.
        let Some(deadline) = Instant::now().checked_add(duration) else {
            while !*guard {
                guard = self.cvar.wait(guard).unwrap_or_else(PoisonError::into_inner);
            }

            return true;
        };

        // Condvars can wake up spuriously, so keep waiting out the remainder.
        while !*guard {
            let now = Instant::now();
            if now >= deadline {
                break;
            }

            guard = match self.cvar.wait_timeout(guard, deadline - now) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }

        *guard
    }
}

impl Pacer for CancellationToken {
    fn pause(&self, duration: Duration) -> bool {
        self.sleep_with_cancellation(duration)
    }
}
