use glam::Vec3;

/// Vertex of a flat-shaded mesh: every face carries its own copy of each
/// corner so the face normal can be stored per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub const ICOSAHEDRON_FACES: usize = 20;

// Golden-ratio icosahedron corners before normalisation.
const PHI: f32 = 1.618_034;
const ICOSAHEDRON_CORNERS: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

// Counter-clockwise when viewed from outside.
const ICOSAHEDRON_INDICES: [[usize; 3]; ICOSAHEDRON_FACES] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Unit-circumradius icosahedron as a non-indexed triangle list with flat
/// normals. Instances scale it to their size in the model matrix.
pub fn icosahedron() -> Vec<MeshVertex> {
    let corners: Vec<Vec3> = ICOSAHEDRON_CORNERS
        .iter()
        .map(|c| Vec3::from_array(*c).normalize())
        .collect();
    let mut out = Vec::with_capacity(ICOSAHEDRON_FACES * 3);
    for [a, b, c] in ICOSAHEDRON_INDICES {
        let (pa, pb, pc) = (corners[a], corners[b], corners[c]);
        let normal = (pb - pa).cross(pc - pa).normalize();
        for p in [pa, pb, pc] {
            out.push(MeshVertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    out
}

/// Corner offsets for a camera-facing particle quad, two triangles.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];
