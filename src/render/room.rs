use fnv::FnvHashMap;
use room_core::material::{FaceMaterial, MaterialSet, Shading};
use room_core::{Color, LayerId, Light, SceneState};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) camera_fwd: [f32; 4],
    pub(crate) fog_color: [f32; 4],
    pub(crate) fog_range: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) dir_color: [f32; 4],
    pub(crate) dir_position: [f32; 4],
    pub(crate) point_color: [f32; 4],
    pub(crate) point_position: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FaceUniforms {
    pub(crate) params: [f32; 4],
    pub(crate) specular: [f32; 4],
    pub(crate) emissive: [f32; 4],
}

fn rgb4(color: Color, scale: f32) -> [f32; 4] {
    let [r, g, b] = color.to_array();
    [r * scale, g * scale, b * scale, 1.0]
}

impl GlobalUniforms {
    pub(crate) fn from_scene(state: &SceneState) -> Self {
        let cam = &state.camera;
        let mut g = Self {
            view_proj: cam.view_projection().to_cols_array_2d(),
            camera_pos: cam.eye.extend(1.0).to_array(),
            camera_fwd: cam.forward().extend(0.0).to_array(),
            fog_color: rgb4(state.fog.color, 1.0),
            fog_range: [state.fog.near, state.fog.far, 0.0, 0.0],
            ..bytemuck::Zeroable::zeroed()
        };
        for light in &state.lights {
            match *light {
                Light::Ambient { color, intensity } => g.ambient = rgb4(color, intensity),
                Light::Directional {
                    color,
                    intensity,
                    position,
                } => {
                    g.dir_color = rgb4(color, intensity);
                    g.dir_position = position.extend(0.0).to_array();
                }
                Light::Point {
                    color,
                    intensity,
                    distance,
                    position,
                } => {
                    g.point_color = rgb4(color, intensity);
                    g.point_position = position.extend(distance).to_array();
                }
            }
        }
        g
    }
}

impl FaceUniforms {
    pub(crate) fn from_material(mat: &FaceMaterial, mesh_scale: f32) -> Self {
        let (lit, shininess, specular, emissive) = match mat.shading {
            Shading::Unlit => (0.0, 1.0, [0.0; 4], [0.0; 4]),
            Shading::Phong {
                shininess,
                specular,
                emissive,
                emissive_intensity,
            } => (
                1.0,
                shininess,
                rgb4(specular, 1.0),
                rgb4(emissive, emissive_intensity),
            ),
        };
        Self {
            params: [mat.opacity, shininess, lit, mesh_scale],
            specular,
            emissive,
        }
    }
}

pub(crate) fn globals_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("room_globals_bgl"),
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
    })
}

pub(crate) fn face_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("room_face_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                // The vertex stage reads the mesh scale.
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    })
}

pub(crate) struct FaceDraw {
    pub(crate) face: usize,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) transparent: bool,
}

/// GPU side of one six-face mesh: a uniform buffer per face and the bind
/// groups built from the last material set.
pub(crate) struct MeshFaces {
    pub(crate) label: &'static str,
    pub(crate) scale: f32,
    pub(crate) uniforms: Vec<wgpu::Buffer>,
    pub(crate) draws: Vec<FaceDraw>,
}

impl MeshFaces {
    pub(crate) fn new(device: &wgpu::Device, label: &'static str, scale: f32) -> Self {
        let uniforms = (0..room_core::constants::FACE_COUNT)
            .map(|face| {
                device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(&format!("{label}_face{face}_uniforms")),
                    size: std::mem::size_of::<FaceUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                })
            })
            .collect();
        Self {
            label,
            scale,
            uniforms,
            draws: Vec::new(),
        }
    }

    /// Replace every face binding with `materials`.
    pub(crate) fn rebind(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        textures: &FnvHashMap<LayerId, (wgpu::Texture, wgpu::TextureView)>,
        materials: &MaterialSet,
    ) {
        self.draws.clear();
        for (face, (mat, buffer)) in materials.iter().zip(&self.uniforms).enumerate() {
            let Some((_, view)) = textures.get(&mat.layer) else {
                log::error!("[render] no texture for layer {}", mat.layer.label());
                continue;
            };
            queue.write_buffer(
                buffer,
                0,
                bytemuck::bytes_of(&FaceUniforms::from_material(mat, self.scale)),
            );
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{}_face{}_bg", self.label, face)),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: buffer.as_entire_binding(),
                    },
                ],
            });
            self.draws.push(FaceDraw {
                face,
                bind_group,
                transparent: mat.transparent,
            });
        }
    }
}
