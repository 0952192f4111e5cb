//! Abstractions over GPU calls which can be profiled.

use miette::{Context, IntoDiagnostic, Result};

use super::PREFERRED_TEXTURE_FORMAT;

/// GPU state abstracted so GPU calls can be profiled if the feature flags are enabled.
pub(crate) struct Gpu<'window> {
    /// GPU device.
    pub(crate) device: wgpu::Device,
    /// GPU surface.
    pub(crate) surface: wgpu::Surface<'window>,
    /// GPU queue.
    pub(crate) queue: wgpu::Queue,
    /// GPU surface configuration.
    config: wgpu::SurfaceConfiguration,
}

impl<'window> Gpu<'window> {
    /// Create a GPU surface on the window.
    pub(crate) async fn new<W>(vsync: bool, width: u32, height: u32, window: W) -> Result<Self>
    where
        W: wgpu::WindowHandle + 'window,
    {
        // Get a handle to our GPU
        let instance = wgpu::Instance::default();

        log::debug!("Creating GPU surface on the window");

        // Create a GPU surface on the window
        let surface = instance
            .create_surface(window)
            .into_diagnostic()
            .wrap_err("Error creating surface on window")?;

        log::debug!("Requesting adapter");

        // Request an adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptionsBase {
                // A single texture is drawn, no need for the strongest GPU
                power_preference: wgpu::PowerPreference::LowPower,
                force_fallback_adapter: false,
                // Request an adaptar which can render to our surface
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or_else(|| miette::miette!("Error getting GPU adapter for window"))?;

        // Get the surface capabilities
        let swapchain_capabilities = surface.get_capabilities(&adapter);
        let alpha_mode = swapchain_capabilities
            .alpha_modes
            .first()
            .copied()
            .ok_or_else(|| miette::miette!("Surface is incompatible with the GPU adapter"))?;

        // Create the logical device and command queue
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    // WebGL doesn't support all features, so use the lowest limits
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await
            .into_diagnostic()
            .wrap_err("Error getting logical GPU device for surface")?;

        // Configure the render surface
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: PREFERRED_TEXTURE_FORMAT,
            width: width.max(1),
            height: height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![PREFERRED_TEXTURE_FORMAT],
        };
        surface.configure(&device, &config);

        Ok(Self {
            device,
            surface,
            queue,
            config,
        })
    }

    /// Start a new rendering event.
    ///
    /// Returns `None` when the surface is not available this frame.
    #[inline]
    pub(crate) fn start(&mut self) -> Option<Frame> {
        profiling::scope!("Create command encoder");

        // Get the main render texture
        let surface_texture = {
            profiling::scope!("Retrieve surface texture");

            match self.surface.get_current_texture() {
                Ok(surface_texture) => surface_texture,
                Err(wgpu::SurfaceError::Timeout) => {
                    log::debug!("Timeout acquiring surface texture, skipping frame");

                    return None;
                }
                Err(err) => {
                    log::warn!("Error acquiring surface texture, reconfiguring: {err}");

                    // Lost and outdated surfaces need to be configured again
                    self.surface.configure(&self.device, &self.config);

                    return None;
                }
            }
        };

        // Create the encoder
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Command Encoder"),
            });

        // Create a texture view from the main render texture
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Some(Frame {
            encoder,
            surface_view,
            surface_texture,
            queue: &self.queue,
        })
    }

    /// Resize the surface.
    ///
    /// On the web this happens when the canvas element changes size, such as when going fullscreen.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Resizing the surface to ({width}x{height})");

        // Ensure that the render surface is at least 1 pixel big and not bigger than the GPU supports, otherwise an error would occur
        let max_size = self.device.limits().max_texture_dimension_2d;
        self.config.width = width.clamp(1, max_size);
        self.config.height = height.clamp(1, max_size);
        self.surface.configure(&self.device, &self.config);
    }

    /// Size of the screen in pixels.
    #[inline]
    pub(crate) const fn screen_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}

/// Rendering state for a single frame.
pub(crate) struct Frame<'gpu> {
    /// GPU command encoder.
    pub(crate) encoder: wgpu::CommandEncoder,
    /// GPU surface view.
    pub(crate) surface_view: wgpu::TextureView,
    /// GPU surface texture.
    pub(crate) surface_texture: wgpu::SurfaceTexture,
    /// GPU queue.
    pub(crate) queue: &'gpu wgpu::Queue,
}

impl<'gpu> Frame<'gpu> {
    /// Finish rendering event.
    #[inline]
    pub(crate) fn present(self) {
        // Draw to the texture
        {
            profiling::scope!("Submit queue");

            self.queue.submit(Some(self.encoder.finish()));
        }

        // Show the texture in the window
        {
            profiling::scope!("Present surface texture");

            self.surface_texture.present();
        }
    }
}
