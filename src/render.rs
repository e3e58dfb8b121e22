use fnv::FnvHashMap;
use room_core::constants::{RASTER_SIZE, ROOM_DEPTH, ROOM_HEIGHT, ROOM_WIDTH, SNOW_MESH_SCALE};
use room_core::geometry::{BoxMesh, Vertex};
use room_core::material::BoundMaterials;
use room_core::{LayerId, SceneState};
use std::ops::Range;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod room;

use room::{face_layout, globals_layout, GlobalUniforms, MeshFaces};

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    opaque_pipeline: wgpu::RenderPipeline,
    blend_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    face_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    face_ranges: Vec<Range<u32>>,

    // One texture per raster layer, shared by every face showing it
    textures: FnvHashMap<LayerId, (wgpu::Texture, wgpu::TextureView)>,
    room_faces: MeshFaces,
    snow_faces: MeshFaces,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[render] WebGPU ready: {}x{} {:?}", width, height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("room_shader"),
            source: wgpu::ShaderSource::Wgsl(room_core::ROOM_WGSL.into()),
        });
        let globals_bgl = globals_layout(&device);
        let face_bgl = face_layout(&device);
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("room_pl"),
            bind_group_layouts: &[&globals_bgl, &face_bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline = helpers::make_room_pipeline(
            &device,
            &pl,
            &shader,
            vertex_layout(),
            format,
            None,
            "room_opaque_pipeline",
        );
        let blend_pipeline = helpers::make_room_pipeline(
            &device,
            &pl,
            &shader,
            vertex_layout(),
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            "room_blend_pipeline",
        );

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("room_globals"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("room_globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("layer_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let mesh = BoxMesh::room(ROOM_WIDTH, ROOM_HEIGHT, ROOM_DEPTH);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("room_vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("room_indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let raster = RASTER_SIZE as u32;
        let textures: FnvHashMap<_, _> = LayerId::ALL
            .iter()
            .map(|id| {
                (
                    *id,
                    helpers::create_layer_texture(&device, id.label(), raster),
                )
            })
            .collect();

        let room_faces = MeshFaces::new(&device, "room", 1.0);
        let snow_faces = MeshFaces::new(&device, "snow", SNOW_MESH_SCALE);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            opaque_pipeline,
            blend_pipeline,
            globals_buffer,
            globals_bind_group,
            face_bgl,
            sampler,
            vertex_buffer,
            index_buffer,
            face_ranges: mesh.faces.to_vec(),
            textures,
            room_faces,
            snow_faces,
            width,
            height,
            clear_color: wgpu::Color::WHITE,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
            log::info!("[render] resized to {}x{}", width, height);
        }
    }

    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Rebuild both meshes' face bindings after a theme switch.
    pub fn bind_materials(&mut self, materials: &BoundMaterials) {
        self.room_faces.rebind(
            &self.device,
            &self.queue,
            &self.face_bgl,
            &self.sampler,
            &self.textures,
            &materials.room,
        );
        self.snow_faces.rebind(
            &self.device,
            &self.queue,
            &self.face_bgl,
            &self.sampler,
            &self.textures,
            &materials.snow,
        );
    }

    pub fn upload_layer(&mut self, id: LayerId, pixels: &[u8]) {
        if let Some((texture, _)) = self.textures.get(&id) {
            helpers::write_layer_pixels(&self.queue, texture, RASTER_SIZE as u32, pixels);
        }
    }

    /// Camera, fog, lights and clear colour for the next frame.
    pub fn update_scene(&mut self, state: &SceneState) {
        let globals = GlobalUniforms::from_scene(state);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        let [r, g, b] = state.clear_color.to_array();
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };
    }

    pub fn render(&mut self, snow_visible: bool) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("room_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

            // Room first, then the translucent snow shell on top of it.
            let mut meshes = vec![&self.room_faces];
            if snow_visible {
                meshes.push(&self.snow_faces);
            }
            for mesh in meshes {
                for draw in &mesh.draws {
                    rpass.set_pipeline(if draw.transparent {
                        &self.blend_pipeline
                    } else {
                        &self.opaque_pipeline
                    });
                    rpass.set_bind_group(1, &draw.bind_group, &[]);
                    rpass.draw_indexed(self.face_ranges[draw.face].clone(), 0, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
