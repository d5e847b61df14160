//! Vertex formats used by the demo geometry.
//!
//! Layouts match the attribute locations the shaders expect: location 0 is
//! always the position, location 1 is the colour or texture coordinate.

use std::mem::size_of;

/// Position-only vertex (stride 12).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    /// Object-space position.
    pub position: [f32; 3],
}

/// Position + RGB colour vertex (stride 24).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Linear RGB colour.
    pub color: [f32; 3],
}

/// Position + texture coordinate vertex (stride 20).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

static POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];
static COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
static TEXTURED_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

/// Typed vertex data for one drawable.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexData {
    /// Position-only vertices.
    Position(Vec<PositionVertex>),
    /// Coloured vertices.
    Color(Vec<ColorVertex>),
    /// Textured vertices.
    Textured(Vec<TexturedVertex>),
}

impl VertexData {
    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Position(v) => v.len(),
            Self::Color(v) => v.len(),
            Self::Textured(v) => v.len(),
        }
    }

    /// Whether there are no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Position(v) => bytemuck::cast_slice(v),
            Self::Color(v) => bytemuck::cast_slice(v),
            Self::Textured(v) => bytemuck::cast_slice(v),
        }
    }

    /// Byte stride of one vertex.
    #[must_use]
    pub fn stride(&self) -> u64 {
        (match self {
            Self::Position(_) => size_of::<PositionVertex>(),
            Self::Color(_) => size_of::<ColorVertex>(),
            Self::Textured(_) => size_of::<TexturedVertex>(),
        }) as u64
    }

    /// Vertex buffer layout for pipeline creation.
    #[must_use]
    pub fn layout(&self) -> wgpu::VertexBufferLayout<'static> {
        let attributes: &'static [wgpu::VertexAttribute] = match self {
            Self::Position(_) => &POSITION_ATTRIBUTES,
            Self::Color(_) => &COLOR_ATTRIBUTES,
            Self::Textured(_) => &TEXTURED_ATTRIBUTES,
        };
        wgpu::VertexBufferLayout {
            array_stride: self.stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}
