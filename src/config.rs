//! Configuration for the plot window, its producer and the drawing host.

use std::time::Duration;

use egui::Color32;

use crate::error::Result;
use crate::producer::SineSource;
use crate::window::SampleWindow;

/// Top-level configuration.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `capacity`       | Number of samples kept in the window |
/// | `min`, `max`     | Display bounds of the Y axis |
/// | `tick_interval`  | Pause between producer ticks |
/// | `phase_step`     | Phase advance per tick of the default sine source |
/// | appearance       | `line_color`, `background`, `stroke_width` |
/// | window chrome    | `title`, `native_options` |
pub struct PlotConfig {
    // ── Window / data ────────────────────────────────────────────────────────
    pub capacity: usize,
    pub min: f32,
    pub max: f32,

    // ── Producer ─────────────────────────────────────────────────────────────
    /// Roughly 30 Hz by default.
    pub tick_interval: Duration,
    pub phase_step: f32,

    // ── Appearance ───────────────────────────────────────────────────────────
    pub line_color: Color32,
    pub background: Color32,
    /// In egui points, so display density is already accounted for.
    pub stroke_width: f32,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title; also the key under which eframe stores state.
    pub title: String,
    pub native_options: Option<eframe::NativeOptions>,
}

impl Clone for PlotConfig {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            min: self.min,
            max: self.max,
            tick_interval: self.tick_interval,
            phase_step: self.phase_step,
            line_color: self.line_color,
            background: self.background,
            stroke_width: self.stroke_width,
            title: self.title.clone(),
            native_options: self.native_options.clone(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            min: -1.5,
            max: 1.5,

            tick_interval: Duration::from_millis(1000 / 30),
            phase_step: 0.16,

            line_color: Color32::from_rgb(0x56, 0x86, 0x07),
            background: Color32::from_rgb(0x8D, 0xBF, 0x45),
            stroke_width: 2.0,

            title: "Liveline".to_string(),
            native_options: None,
        }
    }
}

impl PlotConfig {
    /// Build a fresh, zeroed window from `capacity`, `min` and `max`.
    pub fn build_window(&self) -> Result<SampleWindow> {
        SampleWindow::new(self.capacity, self.min, self.max)
    }

    pub fn sine_source(&self) -> SineSource {
        SineSource::new(self.phase_step)
    }
}
