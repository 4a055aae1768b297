use super::helpers;
use super::targets::DEPTH_FORMAT;
use crate::constants::PLACEHOLDER_RGBA;
use glam::Mat4;
use wgpu;

pub(crate) static PHOTO_WGSL: &str = include_str!("../../shaders/photo.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PhotoUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
}

/// GPU side of one photo: its MVP uniform and current texture.
pub(crate) struct PhotoSlot {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) texture: wgpu::Texture,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct PhotoResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout, // uniform + texture + sampler
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) slots: Vec<PhotoSlot>,
}

impl PhotoResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        count: usize,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("photo_shader"),
            source: wgpu::ShaderSource::Wgsl(PHOTO_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("photo_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("photo_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("photo_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_photo"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_photo"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("photo_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let mut res = Self {
            pipeline,
            bgl,
            sampler,
            slots: Vec::with_capacity(count),
        };
        for i in 0..count {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("photo_uniforms"),
                size: std::mem::size_of::<PhotoUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let (texture, view) =
                helpers::upload_rgba8(device, queue, "photo_placeholder", 1, 1, &PLACEHOLDER_RGBA);
            let bind_group = res.bind_group(device, &uniform_buffer, &view);
            log::debug!("[render] photo slot {} ready", i);
            res.slots.push(PhotoSlot {
                uniform_buffer,
                texture,
                bind_group,
            });
        }
        res
    }

    fn bind_group(
        &self,
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        view: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("photo_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }

    /// Replace the texture of photo `index`; out-of-range indices are ignored.
    pub(crate) fn set_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        index: usize,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) {
        if index >= self.slots.len() || rgba.len() != (4 * width * height) as usize {
            log::warn!("[render] ignoring texture for photo {}", index);
            return;
        }
        let (texture, view) = helpers::upload_rgba8(device, queue, "photo_tex", width, height, rgba);
        let bind_group = self.bind_group(device, &self.slots[index].uniform_buffer, &view);
        let slot = &mut self.slots[index];
        slot.texture.destroy();
        slot.texture = texture;
        slot.bind_group = bind_group;
    }

    pub(crate) fn write_mvps(&self, queue: &wgpu::Queue, view_proj: Mat4, models: &[Mat4]) {
        for (slot, model) in self.slots.iter().zip(models) {
            let u = PhotoUniforms {
                mvp: (view_proj * *model).to_cols_array_2d(),
            };
            queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }
}
