//! Shared wgpu boilerplate for the sample pipelines.

use super::texture::DEPTH_FORMAT;
use crate::error::ViewportError;

/// Colour target a pipeline renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTarget {
    /// Colour attachment format (the surface format).
    pub format: wgpu::TextureFormat,
    /// MSAA sample count of the colour and depth attachments.
    pub sample_count: u32,
}

/// Vertex-visible uniform buffer binding.
#[must_use]
pub fn vertex_uniform_buffer(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Depth test shared by all pipelines. `LessEqual` so coplanar geometry
/// drawn later (the marker on the grid) wins.
#[must_use]
pub fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Run `create` inside a validation error scope.
///
/// # Errors
///
/// Returns [`ViewportError::ShaderCompile`] labelled `label` if wgpu
/// reported a validation error while `create` ran.
pub async fn validated<T>(
    device: &wgpu::Device,
    label: &str,
    create: impl FnOnce() -> T,
) -> Result<T, ViewportError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = create();
    validation_result(label, device.pop_error_scope().await)?;
    Ok(value)
}

/// Map the outcome of an error scope to a result.
fn validation_result(
    label: &str,
    error: Option<wgpu::Error>,
) -> Result<(), ViewportError> {
    error.map_or(Ok(()), |error| {
        Err(ViewportError::ShaderCompile {
            label: label.to_owned(),
            message: error.to_string(),
        })
    })
}

/// Create a triangle-list pipeline with `vs_main` / `fs_main` entry points,
/// one vertex buffer, a single colour target and the shared depth test.
#[must_use]
pub fn create_mesh_pipeline(
    device: &wgpu::Device,
    target: PipelineTarget,
    label: &str,
    shader: &wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    polygon_mode: wgpu::PolygonMode,
) -> wgpu::RenderPipeline {
    let pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} Pipeline Layout")),
            bind_group_layouts,
            push_constant_ranges: &[],
        });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{label} Pipeline")),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target.format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            polygon_mode,
            ..Default::default()
        },
        depth_stencil: Some(depth_stencil_state()),
        multisample: wgpu::MultisampleState {
            count: target.sample_count,
            ..Default::default()
        },
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gpu::shader_library::{ShaderKind, ShaderLibrary},
        scene::{PositionVertex, VertexData},
    };

    /// Surface-less device, or `None` on machines without an adapter.
    fn headless_device() -> Option<wgpu::Device> {
        pollster::block_on(async {
            let adapter = wgpu::Instance::default()
                .request_adapter(&wgpu::RequestAdapterOptions::default())
                .await
                .ok()?;
            let (device, _queue) = adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()?;
            Some(device)
        })
    }

    const TARGET: PipelineTarget = PipelineTarget {
        format: wgpu::TextureFormat::Rgba8Unorm,
        sample_count: 1,
    };

    fn triangle_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
    ) -> Result<wgpu::RenderPipeline, ViewportError> {
        let layout = VertexData::Position(vec![PositionVertex {
            position: [0.0; 3],
        }])
        .layout();
        pollster::block_on(validated(device, "triangle", || {
            create_mesh_pipeline(
                device,
                TARGET,
                "Triangle",
                shader,
                layout,
                &[],
                wgpu::PolygonMode::Fill,
            )
        }))
    }

    #[test]
    fn clean_scope_is_ok() {
        assert!(validation_result("triangle.wgsl", None).is_ok());
    }

    #[test]
    fn scope_error_becomes_shader_compile() {
        let error = wgpu::Error::Validation {
            source: Box::new(std::io::Error::other("entry point missing")),
            description: "entry point vs_main not found".into(),
        };
        let result = validation_result("triangle.wgsl", Some(error));
        assert!(matches!(
            result,
            Err(ViewportError::ShaderCompile { label, message })
                if label == "triangle.wgsl" && message.contains("vs_main")
        ));
    }

    #[test]
    fn embedded_triangle_builds_a_pipeline() {
        let Some(device) = headless_device() else {
            return;
        };
        let shader = pollster::block_on(
            ShaderLibrary::default().compile(&device, ShaderKind::Triangle),
        )
        .unwrap();
        assert!(triangle_pipeline(&device, &shader).is_ok());
    }

    #[test]
    fn missing_entry_point_is_an_error_not_a_panic() {
        let Some(device) = headless_device() else {
            return;
        };
        let dir = std::env::temp_dir().join(format!(
            "viewport-samples-entry-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let renamed = ShaderKind::Triangle
            .embedded_source()
            .replace("fn vs_main", "fn vertex_main");
        std::fs::write(dir.join("triangle.wgsl"), renamed).unwrap();

        let library = ShaderLibrary::new(Some(dir.clone()));
        let shader =
            pollster::block_on(library.compile(&device, ShaderKind::Triangle))
                .unwrap();
        let result = triangle_pipeline(&device, &shader);
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(result, Err(ViewportError::ShaderCompile { .. })));
    }
}
