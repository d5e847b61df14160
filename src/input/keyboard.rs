use serde::{Deserialize, Serialize};

/// Viewport actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// close = "Escape"
/// wireframe = "KeyW"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Close the window.
    Close,
    /// Draw triangle edges only.
    Wireframe,
    /// Draw filled triangles.
    Fill,
    /// Draw vertices only.
    Points,
}
