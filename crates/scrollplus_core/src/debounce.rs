//! Debounce primitives
//!
//! [`Debouncer`] is a restartable trailing-edge timer: every input pushes its
//! deadline back, and [`Debouncer::poll`] fires exactly once per quiet period.
//! Time is passed in by the caller so hosts can drive it from their frame
//! clock and tests stay deterministic.
//!
//! [`SampleBuffer`] keeps only the newest N samples; older samples that were
//! never consumed are dropped.

use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::error::{ConfigError, Result};

/// Default number of samples retained by [`SampleBuffer`]
pub const DEFAULT_SAMPLE_CAPACITY: usize = 2;

/// Restartable trailing-edge debounce timer
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The quiet period required before the timer fires
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an input at `now`, superseding any pending deadline
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, returning whether one was armed
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the pending deadline (zero once it has passed)
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire if the deadline has passed. Returns true at most once per restart.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Bounded buffer that retains only the newest samples
#[derive(Debug, Clone)]
pub struct SampleBuffer<T: Copy> {
    samples: SmallVec<[T; DEFAULT_SAMPLE_CAPACITY]>,
    capacity: usize,
    dropped: u64,
}

impl<T: Copy> SampleBuffer<T> {
    /// Buffer keeping the newest two samples
    pub fn new() -> Self {
        Self {
            samples: SmallVec::new(),
            capacity: DEFAULT_SAMPLE_CAPACITY,
            dropped: 0,
        }
    }

    /// Buffer keeping the newest `capacity` samples
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        Ok(Self {
            samples: SmallVec::with_capacity(capacity),
            capacity,
            dropped: 0,
        })
    }

    /// Push a sample, discarding the oldest one when full
    pub fn push(&mut self, sample: T) {
        if self.samples.len() == self.capacity {
            self.samples.remove(0);
            self.dropped += 1;
        }
        self.samples.push(sample);
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<T> {
        self.samples.last().copied()
    }

    /// Take all buffered samples, oldest first
    pub fn drain(&mut self) -> SmallVec<[T; DEFAULT_SAMPLE_CAPACITY]> {
        std::mem::take(&mut self.samples)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples discarded because the buffer was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.samples.iter()
    }
}

impl<T: Copy> Default for SampleBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
