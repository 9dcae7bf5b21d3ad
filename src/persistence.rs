//! State persistence: save and load a window record to/from JSON.
//!
//! The record is [`WindowState`]: the three construction scalars plus the
//! samples. It carries no version field; restoring goes through
//! [`SampleWindow::from_state`](crate::window::SampleWindow::from_state), which
//! rejects anything inconsistent.

use std::path::Path;

use crate::error::Result;
use crate::window::WindowState;

/// Serialize the window state as pretty JSON.
pub fn state_to_json(state: &WindowState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Deserialize window state from JSON.
pub fn state_from_json(json: &str) -> Result<WindowState> {
    Ok(serde_json::from_str(json)?)
}

/// Save the window state to a JSON file at the given path.
pub fn save_state_to_path(state: &WindowState, path: &Path) -> Result<()> {
    let txt = state_to_json(state)?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load the window state from a JSON file at the given path.
pub fn load_state_from_path(path: &Path) -> Result<WindowState> {
    let txt = std::fs::read_to_string(path)?;
    state_from_json(&txt)
}
