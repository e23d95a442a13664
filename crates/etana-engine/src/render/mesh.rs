use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

use super::error::MeshError;

/// One interleaved vertex record: position then normal, tightly packed.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    /// Byte-level attribute layout matching the vertex stage's inputs.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// CPU-side mesh: an ordered vertex sequence plus u32 triangle-list indices.
///
/// How the data got here (file import, procedural generation) is an external
/// concern; this type is the boundary the uploader trusts, so `validate`
/// must pass before any GPU transfer.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Checks that every index addresses an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for &index in &self.indices {
            if index as usize >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Number of triangles a full indexed draw produces.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Overwrites every vertex position in place, keeping normals.
    ///
    /// The replacement count must equal the vertex count; on mismatch the
    /// mesh is left untouched.
    pub fn replace_positions(&mut self, new_positions: &[Vec3]) -> Result<(), MeshError> {
        if new_positions.len() != self.vertices.len() {
            return Err(MeshError::PositionCountMismatch {
                expected: self.vertices.len(),
                got: new_positions.len(),
            });
        }

        for (vertex, pos) in self.vertices.iter_mut().zip(new_positions) {
            vertex.position = pos.to_array();
        }
        Ok(())
    }

    /// Appends another mesh, offsetting its indices past our vertices.
    pub fn append(&mut self, other: MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| base + i));
    }
}

/// GPU mesh: one vertex buffer, one index buffer, and the retained CPU copy.
///
/// Buffers are uploaded once at construction. The vertex buffer is created
/// re-uploadable for position replacement; the index buffer is immutable.
/// The CPU copy backs `replace_vertex_positions` (interleaved re-build) and
/// `positions` read-back.
pub struct MeshBuffer {
    data: MeshData,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffer {
    /// Validates `data` and uploads it, one transfer per buffer.
    pub fn create(device: &wgpu::Device, data: MeshData) -> Result<Self, MeshError> {
        data.validate()?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("etana mesh vertex buffer"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("etana mesh index buffer"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let index_count = data.indices.len() as u32;

        Ok(Self {
            data,
            vertex_buffer,
            index_buffer,
            index_count,
        })
    }

    /// Records an indexed triangle-list draw over the full index count.
    ///
    /// A pipeline must already be bound on `rpass`; matching the bound
    /// program's vertex-attribute expectations is the caller's contract.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    /// Re-uploads vertex data with new positions into the existing buffer.
    ///
    /// The position count must match the original upload; normals are kept.
    /// No reallocation happens, so handles stay valid across calls.
    pub fn replace_vertex_positions(
        &mut self,
        queue: &wgpu::Queue,
        new_positions: &[Vec3],
    ) -> Result<(), MeshError> {
        self.data.replace_positions(new_positions)?;
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.data.vertices));
        Ok(())
    }

    /// Current vertex positions, in upload order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.data
            .vertices
            .iter()
            .map(|v| Vec3::from_array(v.position))
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.data.vertices.len()
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn triangle_count(&self) -> usize {
        self.data.triangle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshData {
        let v = |x: f32, y: f32| Vertex::new(Vec3::new(x, y, 0.0), Vec3::Z);
        MeshData::new(
            vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_stride_is_six_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::layout().array_stride, 24);
    }

    #[test]
    fn normal_attribute_follows_position() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn valid_indices_pass() {
        assert!(quad().validate().is_ok());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut data = quad();
        data.indices[4] = 4;
        assert_eq!(
            data.validate(),
            Err(MeshError::IndexOutOfRange { index: 4, vertex_count: 4 })
        );
    }

    #[test]
    fn empty_mesh_is_valid() {
        assert!(MeshData::default().validate().is_ok());
    }

    // ── triangle count ────────────────────────────────────────────────────

    #[test]
    fn triangle_count_is_index_count_over_three() {
        assert_eq!(quad().triangle_count(), 2);
    }

    // ── position replacement ──────────────────────────────────────────────

    #[test]
    fn replace_positions_rejects_count_mismatch() {
        let mut data = quad();
        let before = data.vertices.clone();
        assert_eq!(
            data.replace_positions(&[Vec3::ZERO; 3]),
            Err(MeshError::PositionCountMismatch { expected: 4, got: 3 })
        );
        assert_eq!(data.vertices, before);
    }

    #[test]
    fn replace_positions_keeps_normals() {
        let mut data = quad();
        let shifted: Vec<Vec3> = data
            .vertices
            .iter()
            .map(|v| Vec3::from_array(v.position) + Vec3::X)
            .collect();
        data.replace_positions(&shifted).unwrap();

        assert_eq!(data.vertices[1].position, [2.0, 0.0, 0.0]);
        assert!(data.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn replace_with_unchanged_positions_is_identity() {
        let mut data = quad();
        let before = data.vertices.clone();
        let same: Vec<Vec3> = before
            .iter()
            .map(|v| Vec3::from_array(v.position))
            .collect();
        data.replace_positions(&same).unwrap();
        assert_eq!(data.vertices, before);
    }

    // ── append ────────────────────────────────────────────────────────────

    #[test]
    fn append_offsets_indices() {
        let mut a = quad();
        a.append(quad());
        assert_eq!(a.vertices.len(), 8);
        assert_eq!(a.indices[6..], [4, 5, 6, 4, 6, 7]);
        assert!(a.validate().is_ok());
    }
}
