//! Converts raw platform events into view commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons) and the key-binding map. It is the only thing that sits
//! between raw window events and [`ViewState::execute`](crate::engine::ViewState::execute).
//!
//! Rotation drags are gated here: a press or move only turns into a
//! trackball command while the left button is the *only* button held.

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::engine::ViewCommand;
use crate::options::{KeybindingOptions, PolygonMode};

/// Converts raw window events into [`ViewCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     view.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyW") {
///     view.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last known cursor position in physical pixels. `None` until the
    /// first move, and again after the pointer leaves the window.
    cursor: Option<Vec2>,
    /// Buttons currently held down.
    held: HashSet<MouseButton>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: None,
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels, if known.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub fn is_held(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    /// Whether a rotation drag is in progress: the left button and nothing
    /// else is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.held.len() == 1 && self.held.contains(&MouseButton::Left)
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key).map(|action| match action {
            KeyAction::Close => ViewCommand::Close,
            KeyAction::Wireframe => {
                ViewCommand::SetPolygonMode(PolygonMode::Line)
            }
            KeyAction::Fill => ViewCommand::SetPolygonMode(PolygonMode::Fill),
            KeyAction::Points => {
                ViewCommand::SetPolygonMode(PolygonMode::Point)
            }
        })
    }

    /// Process a raw pointer event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let point = Vec2::new(x, y);
                let anchored = self.cursor.replace(point).is_some();
                if !self.is_dragging() {
                    None
                } else if anchored {
                    Some(ViewCommand::Drag { point })
                } else {
                    // Pressed before any position was known: anchor here.
                    Some(ViewCommand::BeginDrag { point })
                }
            }
            InputEvent::PointerLost => {
                self.held.clear();
                self.cursor = None;
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
        }
    }

    /// Mouse button press/release. A left press that leaves only the left
    /// button held starts a drag at the current cursor position.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewCommand> {
        if !pressed {
            let _ = self.held.remove(&button);
            return None;
        }

        let _ = self.held.insert(button);
        if button != MouseButton::Left || !self.is_dragging() {
            return None;
        }
        self.cursor.map(|point| ViewCommand::BeginDrag { point })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn button(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn hover_without_button_produces_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(moved(10.0, 20.0)), None);
        assert_eq!(input.cursor(), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn press_before_any_move_anchors_at_first_position() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(button(MouseButton::Left, true)), None);
        assert_eq!(
            input.handle_event(moved(300.0, 200.0)),
            Some(ViewCommand::BeginDrag {
                point: Vec2::new(300.0, 200.0)
            })
        );
        assert_eq!(
            input.handle_event(moved(305.0, 200.0)),
            Some(ViewCommand::Drag {
                point: Vec2::new(305.0, 200.0)
            })
        );
    }

    #[test]
    fn pointer_lost_releases_held_buttons() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(10.0, 10.0));
        let _ = input.handle_event(button(MouseButton::Left, true));
        assert!(input.is_dragging());

        assert_eq!(input.handle_event(InputEvent::PointerLost), None);
        assert!(!input.is_held(MouseButton::Left));
        assert_eq!(input.cursor(), None);
        // Release happened in another window; hovering must not rotate.
        assert_eq!(input.handle_event(moved(40.0, 10.0)), None);
        assert_eq!(input.handle_event(moved(80.0, 10.0)), None);
    }

    #[test]
    fn left_press_begins_drag_at_cursor() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(100.0, 100.0));

        assert_eq!(
            input.handle_event(button(MouseButton::Left, true)),
            Some(ViewCommand::BeginDrag {
                point: Vec2::new(100.0, 100.0)
            })
        );
        assert_eq!(
            input.handle_event(moved(110.0, 100.0)),
            Some(ViewCommand::Drag {
                point: Vec2::new(110.0, 100.0)
            })
        );
    }

    #[test]
    fn release_ends_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(button(MouseButton::Left, true));
        assert!(input.is_dragging());

        assert_eq!(input.handle_event(button(MouseButton::Left, false)), None);
        assert!(!input.is_dragging());
        assert_eq!(input.handle_event(moved(5.0, 5.0)), None);
    }

    #[test]
    fn other_buttons_do_not_rotate() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(button(MouseButton::Right, true)), None);
        assert_eq!(input.handle_event(moved(1.0, 2.0)), None);
        assert_eq!(input.handle_event(button(MouseButton::Middle, true)), None);
        assert_eq!(input.handle_event(moved(3.0, 4.0)), None);
    }

    #[test]
    fn chorded_buttons_suspend_the_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(button(MouseButton::Left, true));
        let _ = input.handle_event(button(MouseButton::Right, true));
        assert!(input.is_held(MouseButton::Right));
        assert_eq!(input.handle_event(moved(50.0, 50.0)), None);

        let _ = input.handle_event(button(MouseButton::Right, false));
        assert_eq!(
            input.handle_event(moved(60.0, 50.0)),
            Some(ViewCommand::Drag {
                point: Vec2::new(60.0, 50.0)
            })
        );
    }

    #[test]
    fn left_press_while_right_held_does_not_begin_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(button(MouseButton::Right, true));
        assert_eq!(input.handle_event(button(MouseButton::Left, true)), None);
    }

    #[test]
    fn default_keys_map_to_commands() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("Escape"), Some(ViewCommand::Close));
        assert_eq!(
            input.handle_key_press("KeyW"),
            Some(ViewCommand::SetPolygonMode(PolygonMode::Line))
        );
        assert_eq!(
            input.handle_key_press("KeyF"),
            Some(ViewCommand::SetPolygonMode(PolygonMode::Fill))
        );
        assert_eq!(
            input.handle_key_press("KeyP"),
            Some(ViewCommand::SetPolygonMode(PolygonMode::Point))
        );
        assert_eq!(input.handle_key_press("KeyX"), None);
    }

    #[test]
    fn rebound_keys_are_honoured() {
        let mut input = InputProcessor::new();
        input.key_bindings_mut().bind(KeyAction::Close, "KeyQ");
        assert_eq!(input.handle_key_press("KeyQ"), Some(ViewCommand::Close));
        assert_eq!(input.handle_key_press("Escape"), None);
    }
}
