use std::{fmt, str::FromStr};

use glam::{Mat4, Vec3};

use super::{
    vertex::{ColorVertex, PositionVertex, TexturedVertex, VertexData},
    Part,
};
use crate::{error::ViewportError, gpu::shader_library::ShaderKind};

/// Two triangles covering a unit quad, shared by the grid and the marker.
const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// The available samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Demo {
    /// An empty window cleared to a solid colour.
    Blank,
    /// One triangle drawn from a non-indexed vertex buffer.
    Triangle,
    /// Three coloured triangles drawn from five indexed vertices.
    IndexDrawing,
    /// A large ground grid and an origin marker, rotatable with the mouse.
    #[default]
    Viewport3d,
}

impl Demo {
    /// Every demo, in menu order.
    pub const ALL: [Demo; 4] = [
        Demo::Blank,
        Demo::Triangle,
        Demo::IndexDrawing,
        Demo::Viewport3d,
    ];

    /// Command-line name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Triangle => "triangle",
            Self::IndexDrawing => "index",
            Self::Viewport3d => "grid",
        }
    }

    /// Default window title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Blank => "OpenGL Window",
            Self::Triangle => "Hello triangle",
            Self::IndexDrawing => "Index drawing",
            Self::Viewport3d => "3D viewport",
        }
    }

    /// Default background colour.
    #[must_use]
    pub fn clear_color(self) -> wgpu::Color {
        match self {
            Self::Blank | Self::Triangle => wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
            Self::IndexDrawing => wgpu::Color {
                r: 0.0,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            },
            Self::Viewport3d => wgpu::Color {
                r: 0.4,
                g: 0.4,
                b: 0.4,
                a: 1.0,
            },
        }
    }

    /// Whether mouse drags rotate the view.
    #[must_use]
    pub fn rotation_enabled(self) -> bool {
        matches!(self, Self::Viewport3d)
    }

    /// Drawables of this demo, in draw order.
    #[must_use]
    pub fn parts(self) -> Vec<Part> {
        match self {
            Self::Blank => Vec::new(),
            Self::Triangle => vec![triangle()],
            Self::IndexDrawing => vec![index_drawing()],
            Self::Viewport3d => vec![grid(), marker()],
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = ViewportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ViewportError::UnknownDemo(s.to_owned()))
    }
}

fn triangle() -> Part {
    let vertices = [[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]]
        .map(|position| PositionVertex { position });
    Part {
        label: "Triangle",
        shader: ShaderKind::Triangle,
        vertices: VertexData::Position(vertices.to_vec()),
        indices: None,
        model: None,
    }
}

fn index_drawing() -> Part {
    let vertices = vec![
        ColorVertex {
            position: [-0.5, -0.5, 0.0],
            color: [1.0, 0.0, 0.0],
        },
        ColorVertex {
            position: [0.5, -0.5, 0.0],
            color: [0.0, 1.0, 0.0],
        },
        ColorVertex {
            position: [-0.5, 0.5, 0.0],
            color: [0.0, 0.0, 1.0],
        },
        ColorVertex {
            position: [0.5, 0.5, 0.0],
            color: [1.0, 1.0, 1.0],
        },
        ColorVertex {
            position: [0.0, 0.75, 0.0],
            color: [1.0, 1.0, 0.0],
        },
    ];
    Part {
        label: "Index Drawing",
        shader: ShaderKind::IndexDrawing,
        vertices: VertexData::Color(vertices),
        indices: Some(vec![0, 1, 2, 1, 2, 3, 2, 3, 4]),
        model: None,
    }
}

/// Corners of a unit quad in the XY plane, in `QUAD_INDICES` order.
const QUAD_CORNERS: [[f32; 3]; 4] = [
    [0.5, 0.5, 0.0],
    [0.5, -0.5, 0.0],
    [-0.5, -0.5, 0.0],
    [-0.5, 0.5, 0.0],
];

/// Lay a quad from the XY plane onto the ground (XZ) plane.
fn ground_rotation() -> Mat4 {
    Mat4::from_axis_angle(Vec3::X, 90.0_f32.to_radians())
}

fn grid() -> Part {
    let uvs = [[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]];
    let vertices = QUAD_CORNERS
        .iter()
        .zip(uvs)
        .map(|(&position, uv)| TexturedVertex { position, uv })
        .collect();
    Part {
        label: "Grid",
        shader: ShaderKind::Grid,
        vertices: VertexData::Textured(vertices),
        indices: Some(QUAD_INDICES.to_vec()),
        model: Some(ground_rotation() * Mat4::from_scale(Vec3::splat(1000.0))),
    }
}

fn marker() -> Part {
    let vertices = QUAD_CORNERS
        .map(|position| PositionVertex { position })
        .to_vec();
    Part {
        label: "Marker",
        shader: ShaderKind::Marker,
        vertices: VertexData::Position(vertices),
        indices: Some(QUAD_INDICES.to_vec()),
        model: Some(ground_rotation()),
    }
}
