//! Rendering system with wgpu pipeline and buffer management.
//!
//! The plot's four attribute arrays map onto four vertex buffers. Positions
//! (x, z) and indices are only uploaded after a topology change; heights and
//! colors are rewritten every frame.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::error::ViewerError;
use crate::params::RenderConfig;
use crate::plot::{Color, HeightfieldPlot};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const X_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32];
const Y_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32];
const Z_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32];
const COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![3 => Unorm8x4];

/// Uniform buffer for the heightfield shader
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub isoline_count: i32,
    pub isoline_size: f32,
    pub _padding: [f32; 2], // Pad to 16-byte multiple
}

impl Uniforms {
    pub fn new(view_proj: Mat4, isoline_count: u32, isoline_size: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            isoline_count: isoline_count.min(i32::MAX as u32) as i32,
            isoline_size,
            _padding: [0.0; 2],
        }
    }
}

/// GPU copies of the plot arrays, sized for one grid resolution
struct MeshBuffers {
    x: wgpu::Buffer,
    y: wgpu::Buffer,
    z: wgpu::Buffer,
    color: wgpu::Buffer,
    indices: wgpu::Buffer,
    vertex_count: usize,
    index_count: u32,
}

impl MeshBuffers {
    fn new(device: &wgpu::Device, plot: &HeightfieldPlot) -> Self {
        let vertex_count = plot.vertex_count();

        let x = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("X Buffer"),
            contents: bytemuck::cast_slice(plot.vertices_x()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let z = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Z Buffer"),
            contents: bytemuck::cast_slice(plot.vertices_z()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Written by `update_heights` every frame
        let y = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Y Buffer"),
            size: (vertex_count * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let color = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Color Buffer"),
            size: (vertex_count * std::mem::size_of::<Color>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(plot.vertex_indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            x,
            y,
            z,
            color,
            indices,
            vertex_count,
            index_count: plot.vertex_indices().len() as u32,
        }
    }
}

/// Rendering system managing wgpu device, pipeline and buffers
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    mesh: MeshBuffers,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create new rendering system
    pub async fn new(
        window: Arc<Window>,
        plot: &HeightfieldPlot,
        render_config: &RenderConfig,
    ) -> Result<Self, ViewerError> {
        let size = window.inner_size();

        // Create wgpu instance
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface (window must have 'static lifetime via Arc)
        let surface = instance.create_surface(window)?;

        // Request adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ViewerError::NoAdapter)?;

        // Request device
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // Colors are authored as final display values, so prefer a non-sRGB target
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(ViewerError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "Surface: {:?}, {}x{}",
            surface_format,
            config.width,
            config.height
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Heightfield Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let uniforms = Uniforms::new(Mat4::IDENTITY, 0, render_config.isoline_size);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[&uniform_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Heightfield Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    scalar_layout::<f32>(&X_ATTRIBUTES),
                    scalar_layout::<f32>(&Y_ATTRIBUTES),
                    scalar_layout::<f32>(&Z_ATTRIBUTES),
                    scalar_layout::<Color>(&COLOR_ATTRIBUTES),
                ],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The surface is viewed from both sides
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let depth_view = create_depth_view(&device, config.width, config.height);
        let mesh = MeshBuffers::new(&device, plot);
        let [r, g, b] = render_config.clear_color;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            render_pipeline,
            uniform_buffer,
            uniform_bind_group,
            depth_view,
            mesh,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        })
    }

    /// Current surface size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    /// Reconfigure the surface and depth buffer after a window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, width, height);
    }

    /// Recreate every mesh buffer for the plot's current resolution
    pub fn upload_topology(&mut self, plot: &HeightfieldPlot) {
        self.mesh = MeshBuffers::new(&self.device, plot);
        log::debug!(
            "Uploaded topology: {} vertices, {} indices",
            self.mesh.vertex_count,
            self.mesh.index_count
        );
    }

    /// Write this frame's heights and colors
    pub fn update_heights(&self, plot: &HeightfieldPlot) {
        let (heights, colors) = (plot.vertices_y(), plot.vertices_color());
        if heights.len() != self.mesh.vertex_count || colors.len() != self.mesh.vertex_count {
            log::warn!(
                "Skipping height upload: {} heights for {} vertices",
                heights.len(),
                self.mesh.vertex_count
            );
            return;
        }
        self.queue
            .write_buffer(&self.mesh.y, 0, bytemuck::cast_slice(heights));
        self.queue
            .write_buffer(&self.mesh.color, 0, bytemuck::cast_slice(colors));
    }

    /// Render a frame
    pub fn render(&self, uniforms: &Uniforms) -> Result<(), wgpu::SurfaceError> {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.mesh.x.slice(..));
            render_pass.set_vertex_buffer(1, self.mesh.y.slice(..));
            render_pass.set_vertex_buffer(2, self.mesh.z.slice(..));
            render_pass.set_vertex_buffer(3, self.mesh.color.slice(..));
            render_pass.set_index_buffer(self.mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Single-attribute vertex layout tightly packed with stride `size_of::<T>()`
fn scalar_layout<T>(attributes: &'static [wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<T>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
