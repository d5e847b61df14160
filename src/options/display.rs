use serde::{Deserialize, Serialize};

/// How triangles are rasterized.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PolygonMode {
    /// Filled triangles.
    #[default]
    Fill,
    /// Wireframe edges.
    Line,
    /// Vertices only.
    Point,
}

impl PolygonMode {
    /// The equivalent wgpu rasterizer mode.
    #[must_use]
    pub fn to_wgpu(self) -> wgpu::PolygonMode {
        match self {
            Self::Fill => wgpu::PolygonMode::Fill,
            Self::Line => wgpu::PolygonMode::Line,
            Self::Point => wgpu::PolygonMode::Point,
        }
    }

    /// Device feature needed to draw in this mode.
    #[must_use]
    pub fn required_feature(self) -> wgpu::Features {
        match self {
            Self::Fill => wgpu::Features::empty(),
            Self::Line => wgpu::Features::POLYGON_MODE_LINE,
            Self::Point => wgpu::Features::POLYGON_MODE_POINT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Surface and rasterization settings.
pub struct DisplayOptions {
    /// Background color (RGBA). `None` uses the demo's own color.
    pub clear_color: Option<[f64; 4]>,
    /// MSAA sample count. Falls back to 1 if the surface can't do it.
    pub msaa_samples: u32,
    /// Wait for vertical blank when presenting.
    pub vsync: bool,
    /// Initial polygon mode.
    pub polygon_mode: PolygonMode,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            clear_color: None,
            msaa_samples: 4,
            vsync: true,
            polygon_mode: PolygonMode::Fill,
        }
    }
}
