//! The sample engine: GPU context, scene renderer and view state behind the
//! [`Viewport`] trait that window hosts drive.

/// User-facing operations on a view.
pub mod command;
/// Camera, trackball and input gating for one view.
pub mod view_state;

pub use command::ViewCommand;
pub use view_state::ViewState;

use crate::{
    error::ViewportError,
    gpu::{render_context::RenderContext, shader_library::ShaderLibrary},
    input::InputEvent,
    options::Options,
    renderer::SceneRenderer,
    scene::Demo,
    util::frame_timing::FrameTiming,
};

/// What a window host needs from an interactive view.
pub trait Viewport {
    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns the surface error when the swapchain image could not be
    /// acquired. `Lost` and `Outdated` are fixed by calling
    /// [`on_resize`](Self::on_resize) with the current size.
    fn on_paint(&mut self) -> Result<(), wgpu::SurfaceError>;

    /// The drawable area changed size (physical pixels).
    fn on_resize(&mut self, width: u32, height: u32);

    /// A pointer event arrived. Returns `true` if a redraw is needed.
    fn on_pointer_event(&mut self, event: InputEvent) -> bool;
}

/// One running demo: owns the GPU context, the renderer and the view state.
pub struct SampleEngine {
    context: RenderContext,
    renderer: SceneRenderer,
    view: ViewState,
    frame_timing: FrameTiming,
}

impl SampleEngine {
    /// Create the GPU context for `window` and build `demo`'s scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the GPU context cannot be created or a shader
    /// fails to load or compile.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        demo: Demo,
        options: &Options,
    ) -> Result<Self, ViewportError> {
        let context =
            RenderContext::new(window, size, &options.display).await?;
        let shaders = ShaderLibrary::new(options.shaders.directory.clone());
        let renderer =
            SceneRenderer::new(&context, demo, &shaders, &options.display)
                .await?;

        let mut view = ViewState::new(options, size, demo.rotation_enabled());
        view.set_polygon_mode(renderer.polygon_mode());

        Ok(Self {
            context,
            renderer,
            view,
            frame_timing: FrameTiming::new(),
        })
    }

    /// The interactive view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Whether the user asked to close the view.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.view.exit_requested()
    }

    /// Current surface size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }

    /// Smoothed frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Handle a key press given as a `KeyCode` debug name (e.g. `"KeyW"`).
    /// Returns `true` if a redraw is needed.
    ///
    /// Async because a polygon-mode change rebuilds and validates the
    /// pipelines.
    pub async fn handle_key_press(&mut self, key: &str) -> bool {
        let redraw = self.view.handle_key_press(key);
        self.sync_polygon_mode().await;
        redraw
    }

    /// Rebuild pipelines if the view asked for a different polygon mode and
    /// record the mode the renderer settled on.
    async fn sync_polygon_mode(&mut self) {
        let requested = self.view.polygon_mode();
        if requested == self.renderer.polygon_mode() {
            return;
        }
        let actual = match self
            .renderer
            .set_polygon_mode(&self.context, requested)
            .await
        {
            Ok(mode) => mode,
            Err(e) => {
                log::error!("{e}, keeping {:?}", self.renderer.polygon_mode());
                self.renderer.polygon_mode()
            }
        };
        self.view.set_polygon_mode(actual);
    }
}

impl Viewport for SampleEngine {
    fn on_paint(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.renderer.render(
            &self.context,
            self.view.view_matrix(),
            self.view.projection(),
        )?;
        self.frame_timing.end_frame();
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context);
        self.view.resize(width, height);
    }

    fn on_pointer_event(&mut self, event: InputEvent) -> bool {
        self.view.handle_input(event)
    }
}
