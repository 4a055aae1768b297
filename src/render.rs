use crate::assets::DecodedImage;
use crate::constants::CLEAR_COLOR;
use glam::Mat4;
use web_sys as web;

mod formats;
mod helpers;
mod photos;
mod targets;

use photos::PhotoResources;
use targets::DepthTarget;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    photos: PhotoResources,
    depth: DepthTarget,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, photo_count: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let surface_formats = formats::pick_surface_formats(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: the page background shows through
        let alpha_mode = formats::pick_alpha_mode(
            &caps.alpha_modes,
            adapter.get_info().backend == wgpu::Backend::BrowserWebGpu,
        );
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_formats.storage,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: surface_formats.view_formats(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[render] surface {}x{} {:?} view={:?} alpha={:?}",
            width,
            height,
            surface_formats.storage,
            surface_formats.view,
            alpha_mode
        );

        let photos = PhotoResources::new(&device, &queue, surface_formats.view, photo_count);
        let depth = DepthTarget::new(&device, width, height);
        let [r, g, b, a] = CLEAR_COLOR;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format: surface_formats.view,
            photos,
            depth,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn upload_photo(&mut self, index: usize, image: &DecodedImage) {
        self.photos.set_texture(
            &self.device,
            &self.queue,
            index,
            image.width,
            image.height,
            &image.rgba,
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Reapply the current configuration after the surface was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw every photo with its model matrix; `models[i]` belongs to photo `i`.
    pub fn render(&self, view_proj: Mat4, models: &[Mat4]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.view_format),
                ..Default::default()
            });
        self.photos.write_mvps(&self.queue, view_proj, models);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("gallery_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.photos.pipeline);
            for slot in self.photos.slots.iter().take(models.len()) {
                rpass.set_bind_group(0, &slot.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
