//! Static vertex/index buffers for one drawable.

use wgpu::util::DeviceExt;

use crate::scene::Part;

/// GPU copy of a part's geometry.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    /// Indices (or vertices, when not indexed) covered by the draw call.
    element_count: u32,
}

impl Mesh {
    /// Upload a part's vertices (and indices, if any).
    ///
    /// Returns `None` for a part with nothing to draw; wgpu rejects empty
    /// buffers in a draw.
    #[must_use]
    pub fn new(device: &wgpu::Device, part: &Part) -> Option<Self> {
        if part.vertices.is_empty() {
            log::warn!("{}: no vertices specified, skipping", part.label);
            return None;
        }
        let element_count = part.element_count();
        if element_count == 0 {
            log::warn!("{}: empty index list, skipping", part.label);
            return None;
        }
        log::debug!(
            "{}: uploading {} vertices {:?}",
            part.label,
            part.vertices.len(),
            part.vertices
        );

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Vertex Buffer", part.label)),
                contents: part.vertices.as_bytes(),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = part.indices.as_ref().map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Index Buffer", part.label)),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Some(Self {
            vertex_buffer,
            index_buffer,
            element_count,
        })
    }

    /// Bind the buffers and issue the draw call.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(indices) => {
                pass.set_index_buffer(
                    indices.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..self.element_count, 0, 0..1);
            }
            None => pass.draw(0..self.element_count, 0..1),
        }
    }
}
