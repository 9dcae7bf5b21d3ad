//! Demo: a sine wave scrolling through a 100-sample window at ~30 Hz.
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

use liveline::{run_plot, PlotConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();
    run_plot(PlotConfig::default())
}
