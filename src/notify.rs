//! Change notification between a [`SampleWindow`](crate::window::SampleWindow)
//! and whatever draws it.
//!
//! The window holds at most one listener and calls it synchronously on the
//! producer's thread after every append. A listener must only *schedule* a
//! redraw; it must not block and must not append to the window itself.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receiver of "the window changed" events.
pub trait ChangeListener: Send + Sync {
    fn on_data_changed(&self);
}

impl<F> ChangeListener for F
where
    F: Fn() + Send + Sync,
{
    fn on_data_changed(&self) {
        self()
    }
}

/// Listener handle as stored by the window. Not owned by the window in any
/// meaningful sense: the surface keeps its own clone and may replace it.
pub type SharedListener = Arc<dyn ChangeListener>;

/// Dirty flag for headless consumers: set on every change, cleared by `take`.
#[derive(Debug, Default)]
pub struct RedrawFlag {
    dirty: AtomicBool,
}

impl RedrawFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn is_set(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

impl ChangeListener for RedrawFlag {
    fn on_data_changed(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}

/// Requests an egui repaint on change. egui coalesces repeated requests into
/// the next frame, so the producer is never held up by drawing.
#[derive(Clone)]
pub struct RepaintNotifier {
    ctx: egui::Context,
}

impl RepaintNotifier {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl ChangeListener for RepaintNotifier {
    fn on_data_changed(&self) {
        self.ctx.request_repaint();
    }
}
