//! Fixed-capacity sliding window of samples.
//!
//! The window is shared between a producer thread (appending) and the drawing
//! surface (taking snapshots). Both go through `&self`; the buffer sits behind
//! a mutex so a snapshot never sees a half-applied append.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::notify::SharedListener;

/// Flat, versionless record of a window: the construction parameters plus the
/// current samples (oldest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub capacity: usize,
    pub min: f32,
    pub max: f32,
    pub samples: Vec<f32>,
}

pub struct SampleWindow {
    capacity: usize,
    min: f32,
    max: f32,
    // Always exactly `capacity` long: one pop_front per push_back.
    samples: Mutex<VecDeque<f32>>,
    listener: Mutex<Option<SharedListener>>,
}

impl SampleWindow {
    /// Create a window of `capacity` zeroed samples displayed between `min` and `max`.
    pub fn new(capacity: usize, min: f32, max: f32) -> Result<Self> {
        validate(capacity, min, max)?;
        Ok(Self::with_samples(capacity, min, max, vec![0.0; capacity]))
    }

    /// Rebuild a window from a persisted record.
    pub fn from_state(state: WindowState) -> Result<Self> {
        validate(state.capacity, state.min, state.max)?;
        if state.samples.len() != state.capacity {
            return Err(PlotError::StateMismatch {
                capacity: state.capacity,
                samples: state.samples.len(),
            });
        }
        Ok(Self::with_samples(
            state.capacity,
            state.min,
            state.max,
            state.samples,
        ))
    }

    fn with_samples(capacity: usize, min: f32, max: f32, samples: Vec<f32>) -> Self {
        Self {
            capacity,
            min,
            max,
            samples: Mutex::new(VecDeque::from(samples)),
            listener: Mutex::new(None),
        }
    }

    /// Push `value` as the newest sample, dropping the oldest, then notify the
    /// listener (if any). The listener runs after the lock is released, so a
    /// snapshot taken from inside it already sees `value`.
    pub fn append(&self, value: f32) {
        {
            let mut samples = self.lock_samples();
            samples.pop_front();
            samples.push_back(value);
        }
        // Clone out of the slot so the callback never runs under our lock.
        let listener = self.lock_listener().clone();
        if let Some(listener) = listener {
            listener.on_data_changed();
        }
    }

    /// Replace the listener; `None` detaches.
    ///
    /// An append running on another thread may already hold the old listener,
    /// so it can still be called once after this returns. Stop every writer
    /// first (e.g. [`SampleProducer::stop`](crate::producer::SampleProducer::stop))
    /// when the old listener must not fire again.
    pub fn set_listener(&self, listener: Option<SharedListener>) {
        *self.lock_listener() = listener;
    }

    pub fn has_listener(&self) -> bool {
        self.lock_listener().is_some()
    }

    /// Copy of the current samples, oldest first.
    pub fn snapshot(&self) -> Vec<f32> {
        self.lock_samples().iter().copied().collect()
    }

    /// Capture the window as a persistable record.
    pub fn state(&self) -> WindowState {
        WindowState {
            capacity: self.capacity,
            min: self.min,
            max: self.max,
            samples: self.snapshot(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    // A panic elsewhere cannot leave the deque mid-shift (push/pop are each
    // complete), so a poisoned lock still guards valid data.
    fn lock_samples(&self) -> MutexGuard<'_, VecDeque<f32>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listener(&self) -> MutexGuard<'_, Option<SharedListener>> {
        self.listener.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SampleWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleWindow")
            .field("capacity", &self.capacity)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

fn validate(capacity: usize, min: f32, max: f32) -> Result<()> {
    if capacity == 0 {
        return Err(PlotError::InvalidCapacity);
    }
    // NaN fails the comparison too.
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(PlotError::InvalidBounds { min, max });
    }
    Ok(())
}
