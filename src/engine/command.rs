//! The viewport's interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press or a mouse
//! gesture, is represented as a `ViewCommand`. The
//! [`InputProcessor`](crate::input::InputProcessor) produces them and
//! [`ViewState::execute`](super::ViewState::execute) applies them.

use glam::Vec2;

use crate::options::PolygonMode;

/// A single operation on the open view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// A rotation drag starts at this widget position.
    BeginDrag {
        /// Cursor position in physical pixels.
        point: Vec2,
    },
    /// The rotation drag continues to this widget position.
    Drag {
        /// Cursor position in physical pixels.
        point: Vec2,
    },
    /// Switch the rasterizer polygon mode.
    SetPolygonMode(PolygonMode),
    /// Close the view and leave the event loop.
    Close,
}
