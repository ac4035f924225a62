//! Thread-safe recording of callback invocations.
//!
//! A [`CallRecorder`] collects one entry per call so tests can assert that a
//! branch ran exactly once, never ran, or received a particular argument.
//! Recording takes `&self`, so a recorder can be borrowed by several closures
//! at once, including ones that cross an `.await`.
//!
//! # Examples
//!
//! ```
//! use test_helpers::recorder::CallRecorder;
//!
//! let recorder = CallRecorder::new();
//! let callback = |value: &u8| recorder.record(*value);
//! callback(&3);
//! assert_eq!(recorder.calls(), vec![3]);
//! ```

use parking_lot::Mutex;

/// Records the argument of every invocation in call order.
#[derive(Debug)]
pub struct CallRecorder<A> {
    calls: Mutex<Vec<A>>,
}

impl<A> Default for CallRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> CallRecorder<A> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Records one invocation.
    pub fn record(&self, argument: A) {
        self.calls.lock().push(argument);
    }

    /// Number of recorded invocations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether the recorder never saw a call.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Removes and returns every recorded argument.
    #[must_use]
    pub fn take(&self) -> Vec<A> {
        std::mem::take(&mut *self.calls.lock())
    }
}

impl<A: Clone> CallRecorder<A> {
    /// Returns a copy of every recorded argument.
    #[must_use]
    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().clone()
    }
}
