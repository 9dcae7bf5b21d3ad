use liveline::persistence::*;
use liveline::window::{SampleWindow, WindowState};
use liveline::PlotError;

#[test]
fn window_round_trips_through_json() {
    let w = SampleWindow::new(4, -1.5, 1.5).unwrap();
    for v in [0.25, -0.5, 1.0] {
        w.append(v);
    }
    let json = state_to_json(&w.state()).unwrap();
    let restored = SampleWindow::from_state(state_from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.snapshot(), vec![0.0, 0.25, -0.5, 1.0]);
    assert_eq!(restored.range(), 3.0);
    assert!(!restored.has_listener());
}

#[test]
fn record_is_flat() {
    let state = WindowState {
        capacity: 2,
        min: -1.0,
        max: 1.0,
        samples: vec![0.5, -0.5],
    };
    let value: serde_json::Value = serde_json::from_str(&state_to_json(&state).unwrap()).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["capacity", "max", "min", "samples"]);
}

#[test]
fn rejects_mismatched_sample_count() {
    let state = WindowState {
        capacity: 3,
        min: -1.0,
        max: 1.0,
        samples: vec![0.1, 0.2],
    };
    assert!(matches!(
        SampleWindow::from_state(state),
        Err(PlotError::StateMismatch { capacity: 3, samples: 2 })
    ));
}

#[test]
fn rejects_invalid_bounds_on_restore() {
    let state = WindowState {
        capacity: 1,
        min: 1.0,
        max: 1.0,
        samples: vec![0.0],
    };
    assert!(matches!(
        SampleWindow::from_state(state),
        Err(PlotError::InvalidBounds { .. })
    ));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(state_from_json("{\"capacity\": 2"), Err(PlotError::Json(_))));
}

#[test]
fn save_and_load_file() {
    let path = std::env::temp_dir().join(format!("liveline_state_{}.json", std::process::id()));
    let w = SampleWindow::new(3, 0.0, 10.0).unwrap();
    w.append(7.0);
    save_state_to_path(&w.state(), &path).unwrap();
    let loaded = load_state_from_path(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, w.state());
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("liveline_state_does_not_exist.json");
    assert!(matches!(load_state_from_path(&path), Err(PlotError::Io(_))));
}
