//! Per-size render attachments: depth buffer and the optional multisampled
//! colour target that resolves into the swapchain image.

use super::render_context::RenderContext;

/// Depth format shared by every pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Attachments sized to the current surface.
pub struct FrameTargets {
    /// Depth attachment view.
    pub depth: wgpu::TextureView,
    /// Multisampled colour view (`None` when MSAA is off).
    pub msaa: Option<wgpu::TextureView>,
}

impl FrameTargets {
    /// Create attachments matching the context's surface size, format and
    /// sample count.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let size = wgpu::Extent3d {
            width: context.config.width.max(1),
            height: context.config.height.max(1),
            depth_or_array_layers: 1,
        };

        let depth = create_view(
            &context.device,
            "Depth Target",
            size,
            context.sample_count,
            DEPTH_FORMAT,
        );
        let msaa = (context.sample_count > 1).then(|| {
            create_view(
                &context.device,
                "MSAA Color Target",
                size,
                context.sample_count,
                context.format(),
            )
        });

        Self { depth, msaa }
    }

    /// Colour attachment for one frame: draws into the MSAA target and
    /// resolves to `frame_view`, or draws to `frame_view` directly.
    pub fn color_attachment<'a>(
        &'a self,
        frame_view: &'a wgpu::TextureView,
        clear: wgpu::Color,
    ) -> wgpu::RenderPassColorAttachment<'a> {
        let (view, resolve_target) = match &self.msaa {
            Some(msaa) => (msaa, Some(frame_view)),
            None => (frame_view, None),
        };
        wgpu::RenderPassColorAttachment {
            view,
            resolve_target,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        }
    }

    /// Depth attachment cleared to the far plane.
    pub fn depth_attachment(&self) -> wgpu::RenderPassDepthStencilAttachment<'_> {
        wgpu::RenderPassDepthStencilAttachment {
            view: &self.depth,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }
    }
}

fn create_view(
    device: &wgpu::Device,
    label: &str,
    size: wgpu::Extent3d,
    sample_count: u32,
    format: wgpu::TextureFormat,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
