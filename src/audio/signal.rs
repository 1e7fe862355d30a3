//! Per-session stop signal.

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// A one-shot flag paired with a condition variable.
///
/// Each `PlaybackSession` owns one and hands clones to its two worker loops.
/// The flag makes exactly one false-to-true transition per session: raised by
/// the input listener on `s`/`q`, or by the progress reporter when the track
/// ends on its own.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<SignalState>,
}

struct SignalState {
    stopped: Mutex<bool>,
    cond: Condvar,
}

impl StopSignal {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalState {
                stopped: Mutex::new(false),
                cond: Condvar::new(),
            }),
        }
    }

    /// Raise the signal and wake all waiters.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn raise(&self) -> bool {
        let mut stopped = self.inner.stopped.lock().unwrap();
        if *stopped {
            return false;
        }
        *stopped = true;
        self.inner.cond.notify_all();
        true
    }

    pub fn is_raised(&self) -> bool {
        *self.inner.stopped.lock().unwrap()
    }

    /// Block the caller until the signal is raised.
    pub fn wait(&self) {
        let mut stopped = self.inner.stopped.lock().unwrap();
        while !*stopped {
            stopped = self.inner.cond.wait(stopped).unwrap();
        }
    }

    /// Wait up to `timeout` for the signal; returns whether it is raised.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let stopped = self.inner.stopped.lock().unwrap();
        let (stopped, _) = self
            .inner
            .cond
            .wait_timeout_while(stopped, timeout, |raised| !*raised)
            .unwrap();
        *stopped
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
