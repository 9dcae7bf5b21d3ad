//! Native eframe host for a single live line plot.
//!
//! [`PlotApp`] owns the shared window and its producer. Creating the app is the
//! host's "resume" (listener attached, producer started); dropping it is the
//! host's "pause" (producer stopped and joined, listener detached). The window
//! record is written to eframe storage on save and restored on the next start.

use std::sync::Arc;

use eframe::egui;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::notify::{ChangeListener, RepaintNotifier, SharedListener};
use crate::producer::{SampleProducer, SampleSource};
use crate::render::{polyline, render_window};
use crate::window::{SampleWindow, WindowState};

const STATE_KEY: &str = "liveline_window";

pub struct PlotApp {
    window: Arc<SampleWindow>,
    producer: SampleProducer,
    cfg: PlotConfig,
}

impl PlotApp {
    /// Create the app from the eframe creation context, restoring a stored
    /// window when one is available and valid.
    pub fn new(cc: &eframe::CreationContext<'_>, cfg: PlotConfig) -> Result<Self> {
        let window = match cc
            .storage
            .and_then(|s| eframe::get_value::<WindowState>(s, STATE_KEY))
        {
            Some(state) => match SampleWindow::from_state(state) {
                Ok(w) => {
                    log::info!("restored sample window ({} samples)", w.capacity());
                    w
                }
                Err(e) => {
                    log::warn!("discarding stored window state: {e}");
                    cfg.build_window()?
                }
            },
            None => cfg.build_window()?,
        };
        Self::with_window(Arc::new(window), cc.egui_ctx.clone(), cfg)
    }

    /// Attach `window` to `ctx` and start producing into it with the
    /// configured sine source.
    pub fn with_window(window: Arc<SampleWindow>, ctx: egui::Context, cfg: PlotConfig) -> Result<Self> {
        let source = cfg.sine_source();
        Self::with_source(window, ctx, source, cfg)
    }

    /// Like [`PlotApp::with_window`], feeding the window from `source`.
    pub fn with_source<S>(window: Arc<SampleWindow>, ctx: egui::Context, source: S, cfg: PlotConfig) -> Result<Self>
    where
        S: SampleSource + 'static,
    {
        let notifier = Arc::new(RepaintNotifier::new(ctx));
        window.set_listener(Some(notifier.clone() as SharedListener));
        // Draw what the window already holds (e.g. restored samples) before the first tick.
        notifier.on_data_changed();

        let mut producer = SampleProducer::new(Arc::clone(&window), source, cfg.tick_interval);
        producer.start()?;
        Ok(Self {
            window,
            producer,
            cfg,
        })
    }

    pub fn window(&self) -> &Arc<SampleWindow> {
        &self.window
    }

    pub fn producer(&self) -> &SampleProducer {
        &self.producer
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.cfg.background))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let stroke = egui::Stroke::new(self.cfg.stroke_width, self.cfg.line_color);
                let segments = render_window(&self.window, rect.width(), rect.height());
                let points: Vec<egui::Pos2> = polyline(&segments)
                    .into_iter()
                    .map(|[x, y]| rect.min + egui::vec2(x, y))
                    .collect();
                let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
                    return;
                };
                let painter = ui.painter();
                painter.add(egui::Shape::line(points, stroke));
                // Round caps at both ends of the path.
                painter.circle_filled(first, stroke.width / 2.0, stroke.color);
                painter.circle_filled(last, stroke.width / 2.0, stroke.color);
            });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STATE_KEY, &self.window.state());
    }
}

impl Drop for PlotApp {
    fn drop(&mut self) {
        self.producer.stop();
        self.window.set_listener(None);
    }
}

/// Launch the plot in a native window. Blocks until the window is closed.
pub fn run_plot(mut cfg: PlotConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(480.0, 320.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| Ok(Box::new(PlotApp::new(cc, cfg)?))),
    )
}
