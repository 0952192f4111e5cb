//! Upload the canvas to a texture and draw it scaled to the window.

use std::borrow::Cow;

use crate::canvas::Canvas;

use super::{gpu::Frame, letterbox::Letterbox, PREFERRED_TEXTURE_FORMAT};

/// Texture holding the canvas pixels with the pipeline to draw it to the surface.
pub(crate) struct PresentState {
    /// Texture the canvas pixels are uploaded to.
    texture: wgpu::Texture,
    /// Size of the texture in pixels.
    size: (u32, u32),
    /// Layout of the bind group, needed when recreating the texture.
    bind_group_layout: wgpu::BindGroupLayout,
    /// Nearest neighbor sampler so scaled pixels stay sharp.
    sampler: wgpu::Sampler,
    /// Binds the texture and the sampler.
    bind_group: wgpu::BindGroup,
    /// Pipeline drawing a single full-screen triangle.
    render_pipeline: wgpu::RenderPipeline,
}

impl PresentState {
    /// Create the texture and the pipeline for a canvas size.
    pub(crate) fn new(width: u32, height: u32, device: &wgpu::Device) -> Self {
        // Create the bind group layout for the canvas texture
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Canvas Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Create the sampler we use to sample from the canvas texture
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Canvas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let (texture, bind_group) =
            Self::create_texture(width, height, device, &bind_group_layout, &sampler);

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Canvas Render Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        // Load the shader minified by the build script
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Canvas Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!(concat!(
                env!("OUT_DIR"),
                "/present.wgsl"
            )))),
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Canvas Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                buffers: &[],
                module: &shader,
                entry_point: "vs_main",
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: PREFERRED_TEXTURE_FORMAT,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            texture,
            size: (width, height),
            bind_group_layout,
            sampler,
            bind_group,
            render_pipeline,
        }
    }

    /// Copy the canvas pixels to the texture.
    pub(crate) fn upload(&mut self, canvas: &Canvas, device: &wgpu::Device, queue: &wgpu::Queue) {
        profiling::scope!("Upload canvas");

        let (width, height) = (canvas.width(), canvas.height());

        // Recreate the texture when the canvas changed size
        if self.size != (width, height) {
            log::debug!("Recreating canvas texture with size ({width}x{height})");

            let (texture, bind_group) = Self::create_texture(
                width,
                height,
                device,
                &self.bind_group_layout,
                &self.sampler,
            );
            self.texture = texture;
            self.bind_group = bind_group;
            self.size = (width, height);
        }

        queue.write_texture(
            // Where to copy the pixel data
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            // Actual pixel data
            canvas.as_bytes(),
            // Layout of the texture
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            // Texture size
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }

    /// Draw the canvas texture inside the letterbox, clearing the rest of the surface.
    pub(crate) fn render(&self, frame: &mut Frame, letterbox: &Letterbox, letterbox_color: wgpu::Color) {
        profiling::scope!("Render canvas");

        let mut render_pass = frame
            .encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Canvas Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(letterbox_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

        // A minimized window only gets cleared
        if letterbox.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);

        // Only draw in the calculated letterbox to get nice integer scaling
        let (x, y, width, height) = letterbox.viewport();
        render_pass.set_viewport(x, y, width, height, 0.0, 1.0);

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        // Draw the triangle defined in the vertex shader
        render_pass.draw(0..3, 0..1);
    }

    /// Create the texture and bind it.
    fn create_texture(
        width: u32,
        height: u32,
        device: &wgpu::Device,
        bind_group_layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
    ) -> (wgpu::Texture, wgpu::BindGroup) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Canvas Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: PREFERRED_TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Canvas Bind Group"),
            layout: bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        (texture, bind_group)
    }
}
