//! Procedural prop meshes
//!
//! Every primitive is built in a unit-sized local frame with its base or
//! centre at the origin; placement and sizing happen through the model matrix.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{Mesh, Vertex};

/// Unit cube spanning [-0.5, 0.5] with flat per-face normals (24 vertices).
pub fn cube() -> Mesh {
    // (normal, u, v) with u x v == normal so each face winds counter-clockwise
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = (normal + u * su + v * sv) * 0.5;
            vertices.push(Vertex::new(position, normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(vertices, indices)
}

/// Cone with unit base radius on y = 0 and its apex at y = 1.
///
/// The sides are smooth shaded; the base cap has its own downward normals.
pub fn cone(segments: u32) -> Mesh {
    assert!(segments >= 3, "a cone needs at least 3 segments");

    let radius = 1.0;
    let height = 1.0;
    let apex = Vec3::new(0.0, height, 0.0);
    let side_normal = |angle: f32| {
        Vec3::new(angle.cos() * height, radius, angle.sin() * height).normalize()
    };
    let rim = |angle: f32| Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Sides: one apex vertex per segment so its normal can follow the facet
    for i in 0..segments {
        let a0 = TAU * i as f32 / segments as f32;
        let a1 = TAU * (i + 1) as f32 / segments as f32;
        let base = vertices.len() as u32;
        vertices.push(Vertex::new(rim(a0), side_normal(a0)));
        vertices.push(Vertex::new(apex, side_normal((a0 + a1) * 0.5)));
        vertices.push(Vertex::new(rim(a1), side_normal(a1)));
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // Base cap
    let center = vertices.len() as u32;
    vertices.push(Vertex::new(Vec3::ZERO, Vec3::NEG_Y));
    for i in 0..segments {
        let angle = TAU * i as f32 / segments as f32;
        vertices.push(Vertex::new(rim(angle), Vec3::NEG_Y));
    }
    for i in 0..segments {
        let a = center + 1 + i;
        let b = center + 1 + (i + 1) % segments;
        indices.extend_from_slice(&[center, a, b]);
    }

    Mesh::new(vertices, indices)
}

/// UV sphere of radius 1 centred on the origin.
pub fn uv_sphere(segments: u32, rings: u32) -> Mesh {
    assert!(segments >= 3 && rings >= 2, "sphere too coarse");

    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for ring in 0..=rings {
        let theta = PI * ring as f32 / rings as f32;
        for seg in 0..=segments {
            let phi = TAU * seg as f32 / segments as f32;
            let p = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
            vertices.push(Vertex::new(p, p.normalize()));
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::new();
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            // Skip the zero-area triangles that collapse onto the poles
            if ring != 0 {
                indices.extend_from_slice(&[a, a + 1, b]);
            }
            if ring != rings - 1 {
                indices.extend_from_slice(&[a + 1, b + 1, b]);
            }
        }
    }

    Mesh::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every non-degenerate triangle must face away from `inside`.
    fn assert_outward(mesh: &Mesh, inside: Vec3) {
        for [a, b, c] in mesh.triangles() {
            let n = (b - a).cross(c - a);
            if n.length() < 1e-6 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(
                n.dot(centroid - inside) > 0.0,
                "triangle {:?} {:?} {:?} faces inward", a, b, c
            );
        }
    }

    fn assert_unit_normals(mesh: &Mesh) {
        for v in &mesh.vertices {
            assert!((v.normal().length() - 1.0).abs() < 1e-5);
        }
    }

    fn assert_indices_valid(mesh: &Mesh) {
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_cube() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_indices_valid(&mesh);
        assert_unit_normals(&mesh);
        assert_outward(&mesh, Vec3::ZERO);

        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-0.5));
        assert_eq!(bounds.max, Vec3::splat(0.5));
    }

    #[test]
    fn test_cone() {
        let mesh = cone(12);
        assert_eq!(mesh.triangle_count(), 24);
        assert_indices_valid(&mesh);
        assert_unit_normals(&mesh);
        assert_outward(&mesh, Vec3::new(0.0, 0.25, 0.0));

        let bounds = mesh.bounds().unwrap();
        assert!((bounds.max.y - 1.0).abs() < 1e-6);
        assert!(bounds.min.y.abs() < 1e-6);
    }

    #[test]
    fn test_uv_sphere() {
        let mesh = uv_sphere(16, 8);
        assert_indices_valid(&mesh);
        assert_unit_normals(&mesh);
        assert_outward(&mesh, Vec3::ZERO);
        // Two triangles per quad minus one per quad on each polar ring
        assert_eq!(mesh.triangle_count(), 16 * 8 * 2 - 2 * 16);

        for v in &mesh.vertices {
            assert!((v.position().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    #[should_panic]
    fn test_cone_too_few_segments() {
        cone(2);
    }
}
