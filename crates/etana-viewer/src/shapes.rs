//! Procedural demo model.
//!
//! The viewer ships its own geometry instead of depending on a mesh-file
//! importer: a piston-like assembly (base disc, rod, head block) built from
//! cuboid and cylinder primitives with flat per-face normals.

use etana_engine::render::{MeshData, Vertex};
use glam::Vec3;

/// Axis-aligned box centered at the origin.
///
/// 24 vertices (4 per face) so each face carries its own flat normal.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let hx = width / 2.0;
    let hy = height / 2.0;
    let hz = depth / 2.0;

    // (normal, four corners in CCW order seen from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Z,
            [
                Vec3::new(-hx, -hy, hz),
                Vec3::new(hx, -hy, hz),
                Vec3::new(hx, hy, hz),
                Vec3::new(-hx, hy, hz),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(hx, -hy, -hz),
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(-hx, hy, -hz),
                Vec3::new(hx, hy, -hz),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(hx, -hy, hz),
                Vec3::new(hx, -hy, -hz),
                Vec3::new(hx, hy, -hz),
                Vec3::new(hx, hy, hz),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(-hx, -hy, hz),
                Vec3::new(-hx, hy, hz),
                Vec3::new(-hx, hy, -hz),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-hx, hy, hz),
                Vec3::new(hx, hy, hz),
                Vec3::new(hx, hy, -hz),
                Vec3::new(-hx, hy, -hz),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(hx, -hy, -hz),
                Vec3::new(hx, -hy, hz),
                Vec3::new(-hx, -hy, hz),
            ],
        ),
    ];

    let mut data = MeshData::default();
    for (normal, corners) in faces {
        let base = data.vertices.len() as u32;
        for corner in corners {
            data.vertices.push(Vertex::new(corner, normal));
        }
        data.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    data
}

/// Cylinder along the Y axis, centered at the origin.
///
/// Side normals point radially outward; caps get flat ±Y normals with their
/// own vertex rings, so the silhouette edge stays sharp.
pub fn cylinder(radius: f32, height: f32, segments: u32) -> MeshData {
    assert!(segments >= 3, "a cylinder needs at least 3 segments");

    let hy = height / 2.0;
    let mut data = MeshData::default();

    let ring_point = |i: u32, y: f32| {
        let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
        Vec3::new(radius * theta.cos(), y, radius * theta.sin())
    };
    let ring_normal = |i: u32| {
        let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
        Vec3::new(theta.cos(), 0.0, theta.sin())
    };

    // Side: two rings sharing radial normals, one quad per segment.
    for i in 0..segments {
        let n = ring_normal(i);
        data.vertices.push(Vertex::new(ring_point(i, -hy), n));
        data.vertices.push(Vertex::new(ring_point(i, hy), n));
    }
    for i in 0..segments {
        let a = 2 * i;
        let b = 2 * ((i + 1) % segments);
        data.indices.extend([a, a + 1, b + 1, a, b + 1, b]);
    }

    // Caps: fresh rings plus a center vertex, fanned out.
    for (y, normal) in [(hy, Vec3::Y), (-hy, Vec3::NEG_Y)] {
        let center = data.vertices.len() as u32;
        data.vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));
        for i in 0..segments {
            data.vertices.push(Vertex::new(ring_point(i, y), normal));
        }
        for i in 0..segments {
            let a = center + 1 + i;
            let b = center + 1 + (i + 1) % segments;
            if normal.y > 0.0 {
                data.indices.extend([center, b, a]);
            } else {
                data.indices.extend([center, a, b]);
            }
        }
    }

    data
}

/// Returns a copy of `data` with every position offset by `offset`.
pub fn translated(mut data: MeshData, offset: Vec3) -> MeshData {
    for vertex in &mut data.vertices {
        let p = Vec3::from_array(vertex.position) + offset;
        vertex.position = p.to_array();
    }
    data
}

/// The demo model: a piston standing on the origin, about 23 units tall.
///
/// Modeled at 10x scale; the viewer applies a 0.1 model-matrix scale, which
/// also exercises a non-identity model transform in the shader path.
pub fn piston_model() -> MeshData {
    const SEGMENTS: u32 = 24;

    let mut model = translated(cylinder(8.0, 3.0, SEGMENTS), Vec3::new(0.0, 1.5, 0.0));
    model.append(translated(
        cylinder(2.5, 14.0, SEGMENTS),
        Vec3::new(0.0, 10.0, 0.0),
    ));
    model.append(translated(
        cuboid(6.0, 6.0, 6.0),
        Vec3::new(0.0, 20.0, 0.0),
    ));
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normals_are_unit(data: &MeshData) -> bool {
        data.vertices
            .iter()
            .all(|v| (Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-5)
    }

    // ── cuboid ────────────────────────────────────────────────────────────

    #[test]
    fn cuboid_has_twelve_triangles() {
        let data = cuboid(1.0, 2.0, 3.0);
        assert_eq!(data.vertices.len(), 24);
        assert_eq!(data.triangle_count(), 12);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn cuboid_stays_inside_its_extents() {
        let data = cuboid(2.0, 4.0, 6.0);
        for v in &data.vertices {
            assert!(v.position[0].abs() <= 1.0 + 1e-6);
            assert!(v.position[1].abs() <= 2.0 + 1e-6);
            assert!(v.position[2].abs() <= 3.0 + 1e-6);
        }
    }

    // ── cylinder ──────────────────────────────────────────────────────────

    #[test]
    fn cylinder_triangle_count_scales_with_segments() {
        // 2 per side quad + 1 per cap fan, two caps.
        let data = cylinder(1.0, 2.0, 8);
        assert_eq!(data.triangle_count(), 8 * 4);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn cylinder_side_normals_are_radial() {
        let data = cylinder(3.0, 1.0, 12);
        // Side vertices come first, two per segment.
        for v in data.vertices.iter().take(24) {
            assert!((v.normal[1]).abs() < 1e-6);
        }
        assert!(normals_are_unit(&data));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn translated_shifts_positions_only() {
        let data = translated(cuboid(2.0, 2.0, 2.0), Vec3::new(0.0, 5.0, 0.0));
        for v in &data.vertices {
            assert!(v.position[1] >= 4.0 - 1e-6);
        }
        assert!(normals_are_unit(&data));
    }

    #[test]
    fn piston_model_is_valid_and_grounded() {
        let model = piston_model();
        assert!(model.validate().is_ok());
        assert!(normals_are_unit(&model));

        let min_y = model
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::INFINITY, f32::min);
        let max_y = model
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((min_y - 0.0).abs() < 1e-5);
        assert!((max_y - 23.0).abs() < 1e-4);
    }
}
