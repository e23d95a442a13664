use bytemuck::{Pod, Zeroable};

use crate::device::DEPTH_FORMAT;

use super::error::{ProgramError, ShaderStage};
use super::mesh::Vertex;

/// The per-draw uniform block, strongly typed.
///
/// The string-keyed uniform surface of classic GL shader wrappers is replaced
/// by this fixed layout, resolved once at program creation: the WGSL `Scene`
/// struct must declare exactly these fields in this order (`model`, `view`,
/// `projection` mat4x4 and a `tint` vec3). A source that disagrees fails at
/// link time instead of silently dropping writes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub tint: [f32; 3],
    // std140-style padding: vec3 rounds up to 16 bytes.
    pub _pad: f32,
}

impl SceneUniforms {
    pub fn new(model: glam::Mat4, view: glam::Mat4, projection: glam::Mat4, tint: glam::Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            tint: tint.to_array(),
            _pad: 0.0,
        }
    }
}

/// A compiled and linked shader pair plus its uniform storage.
///
/// Construction compiles the two stages independently and "links" them into a
/// render pipeline; any failure is returned as `ProgramError` with the
/// compiler's diagnostic text, and no handle exists afterward — an unlinked
/// program cannot be bound by construction. Stage modules are dropped when
/// `create` returns.
///
/// Entry points are fixed: `vs_main` in the vertex source, `fs_main` in the
/// fragment source.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
}

impl ShaderProgram {
    /// Compiles both WGSL sources and links them into a pipeline targeting
    /// `surface_format` with the standard depth attachment.
    pub fn create(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ProgramError> {
        let vertex_module = compile_stage(device, ShaderStage::Vertex, vertex_source)?;
        let fragment_module = compile_stage(device, ShaderStage::Fragment, fragment_source)?;

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("etana scene bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(scene_ubo_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("etana scene pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        // Pipeline creation is the link step: stage interfaces and the
        // uniform layout are checked against each other here.
        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("etana scene pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // No culling: the source meshes are not guaranteed closed.
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
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(ProgramError::Link {
                diagnostic: err.to_string(),
            });
        }

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("etana scene ubo"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("etana scene bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            pipeline,
            bind_group,
            uniform_buffer,
        })
    }

    /// Binds the program for subsequent draws on `rpass`.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
    }

    /// Uploads the uniform block consumed by the next submitted draw.
    ///
    /// Must be called every frame before the draw; nothing is cached across
    /// frames.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

/// Compiles one WGSL stage under a validation error scope.
///
/// A captured validation error carries the full naga diagnostic, which is the
/// wgpu-native equivalent of the GL info log.
fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, ProgramError> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(match stage {
            ShaderStage::Vertex => "etana vertex stage",
            ShaderStage::Fragment => "etana fragment stage",
        }),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(err) = pollster::block_on(error_scope.pop()) {
        return Err(ProgramError::Compile {
            stage,
            diagnostic: err.to_string(),
        });
    }

    Ok(module)
}

/// Minimum binding size for the scene uniform buffer.
///
/// `SceneUniforms` holds three mat4 fields so its size is always non-zero;
/// centralising this avoids `.unwrap()` at the pipeline-creation site.
fn scene_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<SceneUniforms>() as u64)
        .expect("SceneUniforms has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};

    // ── uniform block layout ──────────────────────────────────────────────

    #[test]
    fn uniform_block_matches_wgsl_size() {
        // Three mat4x4 (192) + vec3 padded to 16.
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 208);
    }

    #[test]
    fn tint_sits_after_the_matrices() {
        let u = SceneUniforms::new(
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Vec3::new(0.25, 0.5, 0.75),
        );
        let bytes = bytemuck::bytes_of(&u);
        let tint: &[f32] = bytemuck::cast_slice(&bytes[192..204]);
        assert_eq!(tint, &[0.25, 0.5, 0.75]);
    }

    #[test]
    fn matrices_are_column_major() {
        let projection = Mat4::perspective_rh(1.0, 1.5, 0.1, 100.0);
        let u = SceneUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY, projection, Vec3::ONE);
        assert_eq!(u.projection, projection.to_cols_array_2d());
    }
}
