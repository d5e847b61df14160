//! WGSL shader sources: embedded defaults with an optional on-disk override
//! directory, and validated compilation into `wgpu::ShaderModule`s.

use std::{borrow::Cow, path::PathBuf};

use super::pipeline_helpers;
use crate::error::ViewportError;

/// The shaders used by the demo scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Pass-through position, flat colour.
    Triangle,
    /// Pass-through position, per-vertex colour.
    IndexDrawing,
    /// Transformed quad with procedural grid lines.
    Grid,
    /// Transformed quad, flat marker colour.
    Marker,
}

impl ShaderKind {
    /// File name under the shader directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Triangle => "triangle.wgsl",
            Self::IndexDrawing => "index_drawing.wgsl",
            Self::Grid => "grid.wgsl",
            Self::Marker => "marker.wgsl",
        }
    }

    /// Source compiled into the binary.
    #[must_use]
    pub fn embedded_source(self) -> &'static str {
        match self {
            Self::Triangle => {
                include_str!("../../assets/shaders/triangle.wgsl")
            }
            Self::IndexDrawing => {
                include_str!("../../assets/shaders/index_drawing.wgsl")
            }
            Self::Grid => include_str!("../../assets/shaders/grid.wgsl"),
            Self::Marker => include_str!("../../assets/shaders/marker.wgsl"),
        }
    }

    /// Whether the shader reads the transform uniform at group 0.
    #[must_use]
    pub fn uses_transform(self) -> bool {
        matches!(self, Self::Grid | Self::Marker)
    }
}

/// Resolves shader sources, either embedded or from a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderLibrary {
    directory: Option<PathBuf>,
}

impl ShaderLibrary {
    /// Library reading from `directory`, or embedded sources when `None`.
    #[must_use]
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    /// WGSL source text for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ShaderLoad`] if a shader directory is set
    /// and the file cannot be read.
    pub fn source(
        &self,
        kind: ShaderKind,
    ) -> Result<Cow<'static, str>, ViewportError> {
        let Some(dir) = &self.directory else {
            return Ok(Cow::Borrowed(kind.embedded_source()));
        };
        let path = dir.join(kind.file_name());
        log::debug!("reading shader {}", path.display());
        std::fs::read_to_string(&path)
            .map(Cow::Owned)
            .map_err(|source| ViewportError::ShaderLoad { path, source })
    }

    /// Load and compile `kind` into a shader module.
    ///
    /// Compilation runs inside a validation error scope so a bad shader
    /// is reported as an error instead of aborting the device.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ShaderLoad`] or
    /// [`ViewportError::ShaderCompile`].
    pub async fn compile(
        &self,
        device: &wgpu::Device,
        kind: ShaderKind,
    ) -> Result<wgpu::ShaderModule, ViewportError> {
        let source = self.source(kind)?;
        let label = kind.file_name();

        pipeline_helpers::validated(device, label, || {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(source),
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ShaderKind; 4] = [
        ShaderKind::Triangle,
        ShaderKind::IndexDrawing,
        ShaderKind::Grid,
        ShaderKind::Marker,
    ];

    #[test]
    fn embedded_sources_have_both_entry_points() {
        let library = ShaderLibrary::default();
        for kind in ALL {
            let source = library.source(kind).unwrap();
            assert!(source.contains("fn vs_main"), "{kind:?}");
            assert!(source.contains("fn fs_main"), "{kind:?}");
        }
    }

    #[test]
    fn transform_shaders_declare_the_uniform() {
        for kind in ALL {
            let declares = kind.embedded_source().contains("var<uniform>");
            assert_eq!(declares, kind.uses_transform(), "{kind:?}");
        }
    }

    #[test]
    fn directory_overrides_embedded_source() {
        let dir = std::env::temp_dir().join(format!(
            "viewport-samples-shaders-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("marker.wgsl"), "// custom").unwrap();

        let library = ShaderLibrary::new(Some(dir.clone()));
        assert_eq!(library.source(ShaderKind::Marker).unwrap(), "// custom");

        let missing = library.source(ShaderKind::Grid).unwrap_err();
        assert!(matches!(missing, ViewportError::ShaderLoad { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
