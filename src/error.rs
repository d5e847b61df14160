//! Crate-level error types.

use std::{fmt, path::PathBuf};

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the viewport-samples crate.
#[derive(Debug)]
pub enum ViewportError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A shader source file could not be read.
    ShaderLoad {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// WGSL validation failed while building a shader module.
    ShaderCompile {
        /// Shader label.
        label: String,
        /// Validation message from wgpu.
        message: String,
    },
    /// Demo name given on the command line is not known.
    UnknownDemo(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ShaderLoad { path, source } => {
                write!(f, "cannot read shader {}: {source}", path.display())
            }
            Self::ShaderCompile { label, message } => {
                write!(f, "shader {label} failed to compile: {message}")
            }
            Self::UnknownDemo(name) => write!(f, "unknown demo: {name}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ViewportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) | Self::ShaderLoad { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for ViewportError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for ViewportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn shader_load_exposes_io_source() {
        let err = ViewportError::ShaderLoad {
            path: PathBuf::from("shaders/grid.wgsl"),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            ),
        };
        assert!(err.to_string().contains("shaders/grid.wgsl"));
        assert!(err.source().is_some());
    }

    #[test]
    fn message_variants_have_no_source() {
        let err = ViewportError::UnknownDemo("cube".into());
        assert_eq!(err.to_string(), "unknown demo: cube");
        assert!(err.source().is_none());
    }
}
