//! Cube mesh generation.
//!
//! Each triangle carries barycentric coordinates so the fragment shader can
//! draw wireframe edges without a geometry pass. Triangle diagonals show up
//! as edges too, which matches how a triangulated wireframe cube looks.

/// A single vertex of the cube mesh: position + barycentric, 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub barycentric: [f32; 3],
}

impl CubeVertex {
    /// wgpu vertex buffer layout for `CubeVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<CubeVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // barycentric: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

/// The eight corners of a cube with half-extent 1, centered at the origin.
const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0], // 0
    [1.0, -1.0, -1.0],  // 1
    [1.0, 1.0, -1.0],   // 2
    [-1.0, 1.0, -1.0],  // 3
    [-1.0, -1.0, 1.0],  // 4
    [1.0, -1.0, 1.0],   // 5
    [1.0, 1.0, 1.0],    // 6
    [-1.0, 1.0, 1.0],   // 7
];

/// Face quads as corner indices, counter-clockwise seen from outside.
const FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7], // +Z
    [1, 0, 3, 2], // -Z
    [5, 1, 2, 6], // +X
    [0, 4, 7, 3], // -X
    [7, 6, 2, 3], // +Y
    [0, 1, 5, 4], // -Y
];

const BARY: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Generate the cube as a triangle list: 6 faces × 2 triangles = 36 vertices.
pub fn generate_cube_mesh() -> Vec<CubeVertex> {
    let mut vertices = Vec::with_capacity(36);
    for quad in &FACES {
        for tri in [[quad[0], quad[1], quad[2]], [quad[0], quad[2], quad[3]]] {
            for (i, &corner) in tri.iter().enumerate() {
                vertices.push(CubeVertex {
                    position: CORNERS[corner],
                    barycentric: BARY[i],
                });
            }
        }
    }
    vertices
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_vertex_size_is_24_bytes() {
        assert_eq!(std::mem::size_of::<CubeVertex>(), 24);
    }

    #[test]
    fn cube_has_36_vertices() {
        assert_eq!(generate_cube_mesh().len(), 36);
    }

    #[test]
    fn all_positions_on_the_unit_cube() {
        for v in generate_cube_mesh() {
            for c in v.position {
                assert!(c == 1.0 || c == -1.0, "coordinate {c} not ±1");
            }
        }
    }

    #[test]
    fn barycentric_coords_sum_to_one() {
        for (i, v) in generate_cube_mesh().iter().enumerate() {
            let sum: f32 = v.barycentric.iter().sum();
            assert!((sum - 1.0).abs() < 1e-6, "vertex {i}: sum = {sum}");
        }
    }

    #[test]
    fn every_corner_is_used() {
        let mesh = generate_cube_mesh();
        for corner in CORNERS {
            assert!(
                mesh.iter().any(|v| v.position == corner),
                "corner {corner:?} missing from mesh"
            );
        }
    }

    #[test]
    fn each_face_is_planar() {
        let mesh = generate_cube_mesh();
        // 6 vertices per face; within a face exactly one axis is constant.
        for face in mesh.chunks(6) {
            let constant_axes = (0..3)
                .filter(|&axis| face.iter().all(|v| v.position[axis] == face[0].position[axis]))
                .count();
            assert_eq!(constant_axes, 1);
        }
    }

    #[test]
    fn bytemuck_cast_works() {
        let mesh = generate_cube_mesh();
        let bytes: &[u8] = bytemuck::cast_slice(&mesh);
        assert_eq!(bytes.len(), 36 * 24);
    }
}
