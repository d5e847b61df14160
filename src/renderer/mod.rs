//! Scene rendering: turns a demo's parts into GPU meshes and pipelines and
//! draws them every frame.
//!
//! Per frame: acquire the swapchain image, upload the camera uniforms, then
//! for each drawable bind its pipeline, uniforms and buffers and draw, then
//! submit and present.

/// Static vertex/index buffers.
pub mod mesh;

use glam::Mat4;
use wgpu::util::DeviceExt;

use self::mesh::Mesh;
use crate::{
    error::ViewportError,
    gpu::{
        pipeline_helpers, render_context::RenderContext,
        shader_library::{ShaderKind, ShaderLibrary},
        texture::FrameTargets,
    },
    options::{DisplayOptions, PolygonMode},
    scene::{Demo, Part},
};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the three transform matrices.
pub struct TransformUniform {
    /// Camera projection.
    pub projection: [[f32; 4]; 4],
    /// Camera view (look-at composed with the trackball orientation).
    pub view: [[f32; 4]; 4],
    /// Object model matrix.
    pub model: [[f32; 4]; 4],
}

impl TransformUniform {
    /// Pack the matrices in column-major order.
    #[must_use]
    pub fn new(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

/// Uniform buffer and bind group for a part drawn through the camera.
struct Transform {
    model: Mat4,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Everything needed to draw one part.
struct Drawable {
    label: &'static str,
    kind: ShaderKind,
    shader: wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout<'static>,
    mesh: Mesh,
    transform: Option<Transform>,
    pipeline: wgpu::RenderPipeline,
}

/// Draws one demo scene.
pub struct SceneRenderer {
    drawables: Vec<Drawable>,
    transform_layout: wgpu::BindGroupLayout,
    targets: FrameTargets,
    clear_color: wgpu::Color,
    polygon_mode: PolygonMode,
}

impl SceneRenderer {
    /// Compile shaders and upload geometry for `demo`.
    ///
    /// # Errors
    ///
    /// Returns an error if a shader cannot be loaded or fails validation.
    pub async fn new(
        context: &RenderContext,
        demo: Demo,
        shaders: &ShaderLibrary,
        display: &DisplayOptions,
    ) -> Result<Self, ViewportError> {
        let transform_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Transform Bind Group Layout"),
                entries: &[pipeline_helpers::vertex_uniform_buffer(0)],
            },
        );
        let polygon_mode =
            effective_polygon_mode(context, display.polygon_mode);

        let mut drawables = Vec::new();
        for part in demo.parts() {
            let Some(mesh) = Mesh::new(&context.device, &part) else {
                continue;
            };
            let shader = shaders.compile(&context.device, part.shader).await?;
            let transform = part.shader.uses_transform().then(|| {
                let model = part.model.unwrap_or(Mat4::IDENTITY);
                create_transform(context, &transform_layout, &part, model)
            });
            let vertex_layout = part.vertices.layout();
            let pipeline = create_pipeline(
                context,
                PipelineInputs {
                    label: part.label,
                    kind: part.shader,
                    shader: &shader,
                    vertex_layout: vertex_layout.clone(),
                },
                &transform_layout,
                polygon_mode,
            )
            .await?;
            drawables.push(Drawable {
                label: part.label,
                kind: part.shader,
                shader,
                vertex_layout,
                mesh,
                transform,
                pipeline,
            });
        }
        log::info!("{demo}: {} drawables", drawables.len());

        let clear_color = display.clear_color.map_or_else(
            || demo.clear_color(),
            |[r, g, b, a]| wgpu::Color { r, g, b, a },
        );

        Ok(Self {
            drawables,
            transform_layout,
            targets: FrameTargets::new(context),
            clear_color,
            polygon_mode,
        })
    }

    /// Polygon mode the pipelines were built with.
    #[must_use]
    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    /// Rebuild pipelines for `mode`. Unsupported modes fall back to
    /// [`PolygonMode::Fill`]. Returns the mode actually in use.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ShaderCompile`] if a pipeline fails
    /// validation; the previous pipelines and mode are then kept.
    pub async fn set_polygon_mode(
        &mut self,
        context: &RenderContext,
        mode: PolygonMode,
    ) -> Result<PolygonMode, ViewportError> {
        let mode = effective_polygon_mode(context, mode);
        if mode == self.polygon_mode {
            return Ok(mode);
        }
        let mut pipelines = Vec::with_capacity(self.drawables.len());
        for drawable in &self.drawables {
            let inputs = PipelineInputs {
                label: drawable.label,
                kind: drawable.kind,
                shader: &drawable.shader,
                vertex_layout: drawable.vertex_layout.clone(),
            };
            pipelines.push(
                create_pipeline(context, inputs, &self.transform_layout, mode)
                    .await?,
            );
        }
        for (drawable, pipeline) in self.drawables.iter_mut().zip(pipelines) {
            drawable.pipeline = pipeline;
        }
        self.polygon_mode = mode;
        Ok(mode)
    }

    /// Recreate size-dependent attachments after the surface was resized.
    pub fn resize(&mut self, context: &RenderContext) {
        self.targets = FrameTargets::new(context);
    }

    /// Draw one frame with the given camera matrices and present it.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] from acquiring the swapchain
    /// image.
    pub fn render(
        &self,
        context: &RenderContext,
        view: Mat4,
        projection: Mat4,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        for transform in self.drawables.iter().filter_map(|d| d.transform.as_ref())
        {
            let uniform =
                TransformUniform::new(projection, view, transform.model);
            context.queue.write_buffer(
                &transform.buffer,
                0,
                bytemuck::bytes_of(&uniform),
            );
        }

        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Render Pass"),
                    color_attachments: &[Some(
                        self.targets
                            .color_attachment(&frame_view, self.clear_color),
                    )],
                    depth_stencil_attachment: Some(
                        self.targets.depth_attachment(),
                    ),
                    ..Default::default()
                });

            for drawable in &self.drawables {
                pass.set_pipeline(&drawable.pipeline);
                if let Some(transform) = &drawable.transform {
                    pass.set_bind_group(0, &transform.bind_group, &[]);
                }
                drawable.mesh.draw(&mut pass);
            }
        }
        context.submit(encoder);
        frame.present();
        Ok(())
    }
}

fn effective_polygon_mode(
    context: &RenderContext,
    mode: PolygonMode,
) -> PolygonMode {
    if context.supports_polygon_mode(mode) {
        mode
    } else {
        log::warn!("polygon mode {mode:?} not supported by device, using fill");
        PolygonMode::Fill
    }
}

/// Per-drawable pipeline ingredients.
struct PipelineInputs<'a> {
    label: &'static str,
    kind: ShaderKind,
    shader: &'a wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout<'static>,
}

/// Build a drawable's pipeline inside a validation scope, so a shader that
/// does not match the vertex layout or bindings is reported as an error.
async fn create_pipeline(
    context: &RenderContext,
    inputs: PipelineInputs<'_>,
    transform_layout: &wgpu::BindGroupLayout,
    mode: PolygonMode,
) -> Result<wgpu::RenderPipeline, ViewportError> {
    let with_transform = [transform_layout];
    let layouts: &[&wgpu::BindGroupLayout] = if inputs.kind.uses_transform() {
        &with_transform
    } else {
        &[]
    };
    pipeline_helpers::validated(
        &context.device,
        inputs.kind.file_name(),
        || {
            pipeline_helpers::create_mesh_pipeline(
                &context.device,
                context.pipeline_target(),
                inputs.label,
                inputs.shader,
                inputs.vertex_layout,
                layouts,
                mode.to_wgpu(),
            )
        },
    )
    .await
}

fn create_transform(
    context: &RenderContext,
    layout: &wgpu::BindGroupLayout,
    part: &Part,
    model: Mat4,
) -> Transform {
    let uniform = TransformUniform::new(Mat4::IDENTITY, Mat4::IDENTITY, model);
    let buffer =
        context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Transform Buffer", part.label)),
                contents: bytemuck::bytes_of(&uniform),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
    let bind_group =
        context.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Transform Bind Group", part.label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
    Transform {
        model,
        buffer,
        bind_group,
    }
}
