use std::fmt;

use super::{pipeline_helpers::PipelineTarget, texture::DEPTH_FORMAT};
use crate::options::{DisplayOptions, PolygonMode};

/// Errors that can occur during GPU context initialization.
#[derive(Debug)]
pub enum RenderContextError {
    /// Failed to create a wgpu surface from the window handle.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// GPU device request failed (limits or features not met).
    DeviceRequest(wgpu::RequestDeviceError),
    /// Surface configuration not supported by the selected adapter.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => {
                write!(f, "surface creation failed: {e}")
            }
            Self::AdapterRequest(e) => {
                write!(f, "no compatible GPU adapter found: {e}")
            }
            Self::DeviceRequest(e) => write!(f, "device request failed: {e}"),
            Self::UnsupportedSurface => {
                write!(f, "surface configuration not supported by adapter")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// Optional device features the samples use when the adapter has them.
/// Without `TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES` textures are validated
/// against the WebGPU guaranteed format features, not the adapter's.
const OPTIONAL_FEATURES: wgpu::Features = wgpu::Features::POLYGON_MODE_LINE
    .union(wgpu::Features::POLYGON_MODE_POINT)
    .union(wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES);

/// Owns the core wgpu resources: device, queue, surface, and configuration.
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    /// The window surface for presentation.
    pub surface: wgpu::Surface<'static>,
    /// Current surface configuration (format, size, present mode).
    pub config: wgpu::SurfaceConfiguration,
    /// MSAA sample count every pipeline and attachment uses.
    pub sample_count: u32,
    /// Optional features that were granted on the device.
    pub features: wgpu::Features,
}

impl RenderContext {
    /// Create a new render context from the given window surface target and
    /// initial size.
    ///
    /// # Errors
    ///
    /// Returns `RenderContextError` if surface creation, adapter request,
    /// device request, or surface configuration fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
        display: &DisplayOptions,
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;

        let info = adapter.get_info();
        log::info!(
            "adapter: {} ({:?}, {:?}, driver {} {})",
            info.name,
            info.backend,
            info.device_type,
            info.driver,
            info.driver_info
        );

        let features = adapter.features() & OPTIONAL_FEATURES;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Primary Device"),
                required_features: features,
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let (width, height) = (initial_size.0.max(1), initial_size.1.max(1));
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        config.present_mode = if display.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        surface.configure(&device, &config);

        let sample_count = supported_sample_count(
            display.msaa_samples,
            msaa_flags(
                adapter.get_texture_format_features(config.format).flags,
                adapter.get_texture_format_features(DEPTH_FORMAT).flags,
                features.contains(
                    wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES,
                ),
            ),
        );
        log::info!(
            "surface: {:?} {}x{}, {:?}, {sample_count}x MSAA",
            config.format,
            config.width,
            config.height,
            config.present_mode
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            sample_count,
            features,
        })
    }

    /// The surface texture format.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Colour target description for pipelines drawing to the surface.
    #[must_use]
    pub fn pipeline_target(&self) -> PipelineTarget {
        PipelineTarget {
            format: self.format(),
            sample_count: self.sample_count,
        }
    }

    /// Whether the device can rasterize in `mode`.
    #[must_use]
    pub fn supports_polygon_mode(&self, mode: PolygonMode) -> bool {
        self.features.contains(mode.required_feature())
    }

    /// Reconfigure the surface for the new window size. Ignores zero-sized
    /// dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Acquire the next swapchain texture for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the surface is lost, outdated,
    /// or timed out.
    pub fn get_next_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Create a new command encoder for recording GPU commands.
    #[must_use]
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            })
    }

    /// Finish the encoder and submit its command buffer to the GPU queue.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// Multisample flags usable for both the colour and the depth attachment.
///
/// Unless adapter-specific format features were granted, only the
/// guaranteed counts (1 and 4) pass device validation.
fn msaa_flags(
    color: wgpu::TextureFormatFeatureFlags,
    depth: wgpu::TextureFormatFeatureFlags,
    adapter_specific: bool,
) -> wgpu::TextureFormatFeatureFlags {
    let flags = color & depth;
    if adapter_specific {
        flags
    } else {
        flags & wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X4
    }
}

/// Largest sample count not above `requested` that `flags` allow, falling
/// back to 1.
fn supported_sample_count(
    requested: u32,
    flags: wgpu::TextureFormatFeatureFlags,
) -> u32 {
    let count = [16, 8, 4, 2]
        .into_iter()
        .find(|&count| count <= requested && flags.sample_count_supported(count))
        .unwrap_or(1);
    if count != requested.max(1) {
        log::warn!("{requested}x MSAA not supported, using {count}x");
    }
    count
}

#[cfg(test)]
mod tests {
    use wgpu::TextureFormatFeatureFlags as Flags;

    use super::*;

    fn all_counts() -> Flags {
        Flags::MULTISAMPLE_X2
            | Flags::MULTISAMPLE_X4
            | Flags::MULTISAMPLE_X8
            | Flags::MULTISAMPLE_X16
    }

    #[test]
    fn requested_sample_count_is_kept_when_supported() {
        let flags = Flags::MULTISAMPLE_X2 | Flags::MULTISAMPLE_X4;
        assert_eq!(supported_sample_count(4, flags), 4);
    }

    #[test]
    fn sample_count_steps_down_to_a_supported_one() {
        assert_eq!(supported_sample_count(8, Flags::MULTISAMPLE_X4), 4);
        assert_eq!(supported_sample_count(4, Flags::empty()), 1);
    }

    #[test]
    fn zero_or_one_samples_disable_msaa() {
        assert_eq!(supported_sample_count(0, all_counts()), 1);
        assert_eq!(supported_sample_count(1, all_counts()), 1);
    }

    #[test]
    fn guaranteed_features_only_allow_four_samples() {
        let flags = msaa_flags(all_counts(), all_counts(), false);
        assert_eq!(supported_sample_count(8, flags), 4);
        assert_eq!(supported_sample_count(16, flags), 4);
        assert_eq!(supported_sample_count(2, flags), 1);
    }

    #[test]
    fn adapter_specific_features_allow_higher_counts() {
        let flags = msaa_flags(all_counts(), all_counts(), true);
        assert_eq!(supported_sample_count(8, flags), 8);
        assert_eq!(supported_sample_count(2, flags), 2);
    }

    #[test]
    fn depth_format_limits_the_sample_count() {
        let depth = Flags::MULTISAMPLE_X4 | Flags::FILTERABLE;
        let flags = msaa_flags(all_counts(), depth, true);
        assert_eq!(supported_sample_count(8, flags), 4);
    }
}
