//! Demo scenes: what each sample draws, as plain data.
//!
//! A scene is a list of [`Part`]s. Each part names its shader, carries its
//! vertex (and optional index) data and, for the 3D viewport, a model
//! matrix. Nothing here touches the GPU; the renderer turns parts into
//! buffers and pipelines.

mod demo;
/// Vertex formats and buffer layouts.
pub mod vertex;

use glam::Mat4;

pub use demo::Demo;
pub use vertex::{ColorVertex, PositionVertex, TexturedVertex, VertexData};

use crate::gpu::shader_library::ShaderKind;

/// One drawable of a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Debug label for GPU resources.
    pub label: &'static str,
    /// Shader used to draw this part.
    pub shader: ShaderKind,
    /// Vertex data.
    pub vertices: VertexData,
    /// Triangle-list indices. `None` draws the vertices in order.
    pub indices: Option<Vec<u32>>,
    /// Model matrix. `Some` only for parts drawn through the camera.
    pub model: Option<Mat4>,
}

impl Part {
    /// Number of elements a draw call covers.
    #[must_use]
    pub fn element_count(&self) -> u32 {
        self.indices
            .as_ref()
            .map_or(self.vertices.len(), Vec::len) as u32
    }
}
