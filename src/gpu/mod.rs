//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, render attachments,
//! pipeline helpers, and shader source loading.

/// Shared wgpu boilerplate for mesh pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader sources and validated compilation.
pub mod shader_library;
/// Depth and MSAA render attachments.
pub mod texture;
