//! Framework-agnostic state of one open view.
//!
//! `ViewState` is the explicit context that window hosts and renderers are
//! handed; nothing here is global. It owns the trackball, the camera, the
//! input processor and the requested polygon mode, and is mutated only from
//! the event-loop thread.

use glam::{Mat4, Quat};

use super::command::ViewCommand;
use crate::{
    camera::{TrackballController, ViewCamera},
    input::{InputEvent, InputProcessor},
    options::{Options, PolygonMode},
};

/// Interactive state of one view: camera, trackball, input gating.
#[derive(Debug, Clone)]
pub struct ViewState {
    trackball: TrackballController,
    camera: ViewCamera,
    input: InputProcessor,
    polygon_mode: PolygonMode,
    /// Whether user drags rotate this view (false for the flat demos).
    rotation_enabled: bool,
    exit_requested: bool,
}

impl ViewState {
    /// Build the view state from options for a viewport of `size` pixels.
    #[must_use]
    pub fn new(options: &Options, size: (u32, u32), rotation_enabled: bool) -> Self {
        let mut camera = ViewCamera::from_options(&options.camera, 1.0);
        camera.resize(size.0, size.1);
        Self {
            trackball: TrackballController::with_divisor(
                options.camera.drag_divisor,
            ),
            camera,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            polygon_mode: options.display.polygon_mode,
            rotation_enabled,
            exit_requested: false,
        }
    }

    /// Accumulated trackball orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.trackball.current_orientation()
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    /// View matrix for the current frame.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix(self.orientation())
    }

    /// Projection matrix for the current frame.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.camera.projection()
    }

    /// Requested polygon mode.
    #[must_use]
    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    /// Whether a [`ViewCommand::Close`] has been executed.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Feed a pointer event through input gating and execute the resulting
    /// command. Returns `true` if the view needs a redraw.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input
            .handle_event(event)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Look up a key and execute its command. Returns `true` if the view
    /// needs a redraw.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        self.input
            .handle_key_press(key)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Apply a command. Returns `true` if the view needs a redraw.
    pub fn execute(&mut self, command: ViewCommand) -> bool {
        match command {
            ViewCommand::BeginDrag { point } => {
                if self.rotation_enabled {
                    self.trackball.on_press(point);
                }
                false
            }
            ViewCommand::Drag { point } => {
                if !self.rotation_enabled {
                    return false;
                }
                let before = self.trackball.current_orientation();
                let after = self.trackball.on_move(point);
                after != before
            }
            ViewCommand::SetPolygonMode(mode) => {
                let changed = mode != self.polygon_mode;
                if changed {
                    log::debug!("polygon mode {:?} -> {mode:?}", self.polygon_mode);
                }
                self.polygon_mode = mode;
                changed
            }
            ViewCommand::Close => {
                self.exit_requested = true;
                false
            }
        }
    }

    /// Replace the polygon mode without going through a command, e.g. when
    /// the renderer had to fall back to a supported mode.
    pub fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.polygon_mode = mode;
    }
}
