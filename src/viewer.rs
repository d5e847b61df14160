//! Standalone sample window backed by winit.
//!
//! ```no_run
//! # use viewport_samples::{scene::Demo, Viewer};
//! Viewer::builder()
//!     .with_demo(Demo::Viewport3d)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalPosition, LogicalSize, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::{SampleEngine, Viewport},
    error::ViewportError,
    input::{InputEvent, MouseButton},
    options::Options,
    scene::Demo,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    demo: Demo,
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            demo: Demo::default(),
            options: None,
            title: None,
        }
    }

    /// Choose which sample to show.
    #[must_use]
    pub fn with_demo(mut self, demo: Demo) -> Self {
        self.demo = demo;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title. Takes precedence over `window.title` in the
    /// options and the demo's own title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let options = self.options.unwrap_or_default();
        let title = self
            .title
            .or_else(|| options.window.title.clone())
            .unwrap_or_else(|| self.demo.title().to_owned());
        Viewer {
            demo: self.demo,
            options,
            title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing one sample.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    demo: Demo,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop or window cannot be created, or
    /// the engine fails to start (GPU context, shaders).
    pub fn run(self) -> Result<(), ViewportError> {
        let event_loop =
            EventLoop::new().map_err(|e| ViewportError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            startup_error: None,
            demo: self.demo,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ViewportError::Viewer(e.to_string()))?;

        app.startup_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<SampleEngine>,
    /// First fatal error raised while starting up; returned from `run`.
    startup_error: Option<ViewportError>,
    demo: Demo,
    options: Options,
    title: String,
}

fn viewport_size(inner: PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewportError) {
        log::error!("{error}");
        self.startup_error = Some(error);
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn paint(&mut self) {
        let (Some(engine), Some(window)) = (&mut self.engine, &self.window)
        else {
            return;
        };
        match engine.on_paint() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = viewport_size(window.inner_size());
                engine.on_resize(width, height);
                window.request_redraw();
            }
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.startup_error.is_some() {
            return;
        }

        let window_options = &self.options.window;
        let mut attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(
                window_options.width,
                window_options.height,
            ));
        if let Some([x, y]) = window_options.position {
            attrs = attrs.with_position(LogicalPosition::new(x, y));
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(
                    event_loop,
                    ViewportError::Viewer(format!("failed to create window: {e}")),
                );
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        log::info!("{}: {}x{}", self.demo, size.0, size.1);
        let engine = match pollster::block_on(SampleEngine::new(
            window.clone(),
            size,
            self.demo,
            &self.options,
        )) {
            Ok(engine) => engine,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(engine) = &mut self.engine else {
            return;
        };

        let redraw = match event {
            WindowEvent::Resized(size) => {
                let (width, height) = viewport_size(size);
                engine.on_resize(width, height);
                true
            }
            WindowEvent::RedrawRequested => {
                self.paint();
                false
            }
            WindowEvent::MouseInput { button, state, .. } => engine
                .on_pointer_event(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                }),
            #[allow(clippy::cast_possible_truncation)]
            WindowEvent::CursorMoved { position, .. } => engine
                .on_pointer_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                }),
            WindowEvent::Focused(false) => {
                engine.on_pointer_event(InputEvent::PointerLost)
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let redraw = pollster::block_on(
                    engine.handle_key_press(&format!("{code:?}")),
                );
                if engine.exit_requested() {
                    event_loop.exit();
                    return;
                }
                redraw
            }
            _ => false,
        };

        if redraw {
            self.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_demo_title() {
        let viewer = Viewer::builder().with_demo(Demo::Triangle).build();
        assert_eq!(viewer.title, "Hello triangle");
        assert_eq!(viewer.demo, Demo::Triangle);
    }

    #[test]
    fn options_title_beats_demo_title() {
        let mut options = Options::default();
        options.window.title = Some("Custom".into());
        let viewer = Viewer::builder().with_options(options).build();
        assert_eq!(viewer.title, "Custom");
    }

    #[test]
    fn explicit_title_wins() {
        let mut options = Options::default();
        options.window.title = Some("Custom".into());
        let viewer = Viewer::builder()
            .with_options(options)
            .with_title("Explicit")
            .build();
        assert_eq!(viewer.title, "Explicit");
    }

    #[test]
    fn zero_sized_window_is_clamped() {
        assert_eq!(viewport_size(PhysicalSize::new(0, 0)), (1, 1));
        assert_eq!(viewport_size(PhysicalSize::new(640, 480)), (640, 480));
    }
}
