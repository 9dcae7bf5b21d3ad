//! Liveline crate root: re-exports and module wiring.
//!
//! A minimal realtime line plot built on egui/eframe:
//! - `window`: fixed-capacity sliding window of samples with change notification
//! - `producer`: cancellable periodic task that feeds the window
//! - `render`: maps a window snapshot to screen-space line segments
//! - `notify`: the listener contract between window and drawing surface
//! - `persistence`: flat JSON record of a window across host restarts
//! - `app`: native eframe host wiring everything together

pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod persistence;
pub mod producer;
pub mod render;
pub mod window;

// Public re-exports for a compact external API
pub use app::{run_plot, PlotApp};
pub use config::PlotConfig;
pub use error::{PlotError, Result};
pub use notify::{ChangeListener, RedrawFlag, RepaintNotifier, SharedListener};
pub use producer::{ProducerState, SampleProducer, SampleSource, SineSource};
pub use render::{polyline, render, render_window, Segment};
pub use window::{SampleWindow, WindowState};
