//! Error type shared by the window, producer and persistence layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("sample window capacity must be greater than zero")]
    InvalidCapacity,
    #[error("invalid display bounds: min ({min}) must be finite and below max ({max})")]
    InvalidBounds { min: f32, max: f32 },
    /// A restored record does not hold exactly `capacity` samples.
    #[error("window state holds {samples} samples but declares capacity {capacity}")]
    StateMismatch { capacity: usize, samples: usize },
    /// The producer's source went down with a panicking worker thread.
    #[error("producer source was lost when its thread panicked")]
    SourceLost,
    #[error("failed to spawn producer thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("state JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("state file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
