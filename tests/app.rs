use liveline::{PlotApp, PlotConfig, ProducerState, SampleWindow};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn fast_config() -> PlotConfig {
    PlotConfig {
        tick_interval: Duration::from_millis(1),
        ..PlotConfig::default()
    }
}

fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    cond()
}

#[test]
fn construction_attaches_listener_and_starts_producer() {
    let w = Arc::new(SampleWindow::new(8, -1.5, 1.5).unwrap());
    let app = PlotApp::with_window(Arc::clone(&w), egui::Context::default(), fast_config()).unwrap();
    assert_eq!(app.producer().state(), ProducerState::Running);
    assert!(w.has_listener());
    assert!(Arc::ptr_eq(app.window(), &w));
    assert!(wait_until(Duration::from_secs(2), || w.snapshot()[7] != 0.0));
}

#[test]
fn drop_stops_producer_then_detaches() {
    let w = Arc::new(SampleWindow::new(8, -1.5, 1.5).unwrap());
    let app = PlotApp::with_window(Arc::clone(&w), egui::Context::default(), fast_config()).unwrap();
    assert!(wait_until(Duration::from_secs(2), || w.snapshot()[7] != 0.0));

    drop(app);
    assert!(!w.has_listener());
    let snap = w.snapshot();
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(w.snapshot(), snap);
    assert_eq!(Arc::strong_count(&w), 1);
}

#[test]
fn attaching_requests_repaint_before_first_sample() {
    let w = Arc::new(SampleWindow::new(4, -1.5, 1.5).unwrap());
    let ctx = egui::Context::default();

    // The source blocks until released, so no tick can request a repaint.
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let source = move || {
        let _ = release_rx.recv();
        0.0
    };
    let app = PlotApp::with_source(Arc::clone(&w), ctx.clone(), source, fast_config()).unwrap();
    assert!(ctx.has_requested_repaint());
    assert_eq!(w.snapshot(), vec![0.0; 4]);

    drop(release_tx);
    drop(app);
    assert!(!w.has_listener());
}
