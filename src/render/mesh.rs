use crate::error::{GeometryError, GeometryResult};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    };

    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// CPU-side triangle list, ready to be uploaded by the rendering backend.
///
/// Faces never share vertices, so `vertices.len()` is always a multiple of four
/// and every face owns the contiguous index range `4 * face .. 4 * face + 4`.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }
}

struct Face {
    normal: Vec3,
    right: Vec3,
    up: Vec3,
    color: Vec3,
}

// right x up == normal for every face
const CUBE_FACES: [Face; 6] = [
    // Front
    Face { normal: Vec3::Z, right: Vec3::X, up: Vec3::Y, color: Vec3::new(1.0, 0.0, 0.0) },
    // Back
    Face { normal: Vec3::NEG_Z, right: Vec3::NEG_X, up: Vec3::Y, color: Vec3::new(0.0, 1.0, 0.0) },
    // Top
    Face { normal: Vec3::Y, right: Vec3::X, up: Vec3::NEG_Z, color: Vec3::new(0.0, 0.0, 1.0) },
    // Bottom
    Face { normal: Vec3::NEG_Y, right: Vec3::X, up: Vec3::Z, color: Vec3::new(1.0, 1.0, 0.0) },
    // Right
    Face { normal: Vec3::X, right: Vec3::NEG_Z, up: Vec3::Y, color: Vec3::new(0.0, 1.0, 1.0) },
    // Left
    Face { normal: Vec3::NEG_X, right: Vec3::Z, up: Vec3::Y, color: Vec3::new(1.0, 0.0, 1.0) },
];

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Generate a flat-colored cube of edge length `side`, centered on the origin.
///
/// Each face gets its own four vertices, traversed counter-clockwise when seen
/// from outside, so back-face culling with CCW front faces keeps the outer skin.
pub fn generate_cube(side: f32) -> GeometryResult<MeshData> {
    if !side.is_finite() || side <= 0.0 {
        return Err(GeometryError::InvalidMeshSize(side));
    }

    let h = side / 2.0;
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(CUBE_FACES.len() * 4),
        indices: Vec::with_capacity(CUBE_FACES.len() * QUAD_INDICES.len()),
    };

    for (i, face) in CUBE_FACES.iter().enumerate() {
        let center = face.normal * h;
        let right = face.right * h;
        let up = face.up * h;

        mesh.vertices.extend([
            Vertex::new(center - right - up, face.color),
            Vertex::new(center + right - up, face.color),
            Vertex::new(center + right + up, face.color),
            Vertex::new(center - right + up, face.color),
        ]);

        let offset = (i * 4) as u32;
        mesh.indices.extend(QUAD_INDICES.iter().map(|idx| offset + idx));
    }

    log::debug!(
        "Generated cube (side {}): {} vertices, {} indices",
        side,
        mesh.vertices.len(),
        mesh.indices.len()
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_24_vertices_and_36_indices() {
        for side in [0.01, 1.0, 4.0, 250.0] {
            let mesh = generate_cube(side).unwrap();
            assert_eq!(mesh.vertices.len(), 24);
            assert_eq!(mesh.indices.len(), 36);
            assert_eq!(mesh.index_count(), 36);
            assert_eq!(mesh.triangle_count(), 12);
            assert!(mesh.indices.iter().all(|&i| i < 24));
        }
    }

    #[test]
    fn every_vertex_is_a_corner() {
        let side = 4.0;
        let expected = side * 3.0_f32.sqrt() / 2.0;
        let mesh = generate_cube(side).unwrap();

        for v in &mesh.vertices {
            assert!((v.position().length() - expected).abs() < 1e-5);
            assert!(v.position.iter().all(|c| (c.abs() - side / 2.0).abs() < 1e-6));
        }
    }

    #[test]
    fn faces_own_disjoint_index_ranges() {
        let mesh = generate_cube(2.0).unwrap();

        for (face, chunk) in mesh.indices.chunks_exact(6).enumerate() {
            let lo = (face * 4) as u32;
            assert!(chunk.iter().all(|&i| (lo..lo + 4).contains(&i)));

            // all four face vertices are referenced
            for v in lo..lo + 4 {
                assert!(chunk.contains(&v));
            }
        }
    }

    #[test]
    fn each_face_is_flat_colored_and_planar() {
        let mesh = generate_cube(2.0).unwrap();

        for (face, quad) in CUBE_FACES.iter().zip(mesh.vertices.chunks_exact(4)) {
            for v in quad {
                assert_eq!(v.color, face.color.to_array());
                assert!((v.position().dot(face.normal) - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn face_frames_are_right_handed() {
        for face in &CUBE_FACES {
            assert_eq!(face.right.cross(face.up), face.normal);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mesh = generate_cube(3.0).unwrap();

        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (a.position(), b.position(), c.position());
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward triangle {a:?} {b:?} {c:?}");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_cube(1.5).unwrap();
        let b = generate_cube(1.5).unwrap();
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn byte_views_cover_whole_buffers() {
        let mesh = generate_cube(1.0).unwrap();
        assert_eq!(mesh.vertex_bytes().len(), 24 * std::mem::size_of::<Vertex>());
        assert_eq!(mesh.index_bytes().len(), 36 * 4);
        assert_eq!(Vertex::LAYOUT.array_stride, 24);
    }

    #[test]
    fn rejects_non_positive_sides() {
        for side in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                generate_cube(side),
                Err(GeometryError::InvalidMeshSize(_))
            ));
        }
    }
}
