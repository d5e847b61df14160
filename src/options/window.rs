use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Initial window geometry and title.
pub struct WindowOptions {
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    /// Window title. `None` uses the demo's own title.
    pub title: Option<String>,
    /// Outer position of the window in logical pixels. `None` lets the
    /// platform decide.
    pub position: Option<[i32; 2]>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: None,
            position: Some([400, 200]),
        }
    }
}
