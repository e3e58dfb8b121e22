//! Box mesh for the room, viewed from the inside.

use crate::constants::FACE_COUNT;
use glam::Vec3;
use std::ops::Range;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct BoxMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    /// Index range of each face, in the order +X, -X, +Y, -Y, +Z, -Z.
    pub faces: [Range<u32>; FACE_COUNT],
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

fn set(v: &mut Vec3, axis: Axis, value: f32) {
    match axis {
        Axis::X => v.x = value,
        Axis::Y => v.y = value,
        Axis::Z => v.z = value,
    }
}

impl BoxMesh {
    /// Single-segment box centred on the origin.
    ///
    /// Normals point into the box. Texture coordinates have their origin at
    /// the top-left of the raster and are mirrored horizontally, so text on
    /// the walls reads left-to-right from inside.
    pub fn room(width: f32, height: f32, depth: f32) -> Self {
        let mut mesh = Self {
            vertices: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
            faces: Default::default(),
        };
        use Axis::*;
        let planes = [
            (Z, Y, X, -1.0, -1.0, depth, height, width),
            (Z, Y, X, 1.0, -1.0, depth, height, -width),
            (X, Z, Y, 1.0, 1.0, width, depth, height),
            (X, Z, Y, 1.0, -1.0, width, depth, -height),
            (X, Y, Z, 1.0, -1.0, width, height, depth),
            (X, Y, Z, -1.0, -1.0, width, height, -depth),
        ];
        for (face, (u, v, w, udir, vdir, pw, ph, pd)) in planes.into_iter().enumerate() {
            let start = mesh.indices.len() as u32;
            mesh.push_plane(u, v, w, udir, vdir, pw, ph, pd);
            mesh.faces[face] = start..mesh.indices.len() as u32;
        }
        mesh
    }

    #[allow(clippy::too_many_arguments)]
    fn push_plane(
        &mut self,
        u: Axis,
        v: Axis,
        w: Axis,
        udir: f32,
        vdir: f32,
        width: f32,
        height: f32,
        depth: f32,
    ) {
        let base = self.vertices.len() as u16;
        let outward = if depth > 0.0 { 1.0 } else { -1.0 };
        for iy in 0..2u16 {
            for ix in 0..2u16 {
                let mut position = Vec3::ZERO;
                set(&mut position, u, (ix as f32 - 0.5) * width * udir);
                set(&mut position, v, (iy as f32 - 0.5) * height * vdir);
                set(&mut position, w, depth / 2.0);
                let mut normal = Vec3::ZERO;
                set(&mut normal, w, -outward);
                self.vertices.push(Vertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    uv: [1.0 - ix as f32, iy as f32],
                });
            }
        }
        // a b d, b c d over the 2x2 grid
        let (a, b, c, d) = (base, base + 2, base + 3, base + 1);
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn room_box_has_six_quads() {
        let mesh = BoxMesh::room(ROOM_WIDTH, ROOM_HEIGHT, ROOM_DEPTH);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        for (i, range) in mesh.faces.iter().enumerate() {
            assert_eq!(range.start, i as u32 * 6);
            assert_eq!(range.len(), 6);
        }
    }

    #[test]
    fn back_wall_sits_at_half_depth_facing_the_camera() {
        let mesh = BoxMesh::room(ROOM_WIDTH, ROOM_HEIGHT, ROOM_DEPTH);
        let range = mesh.faces[BACK_WALL_FACE].clone();
        for &i in &mesh.indices[range.start as usize..range.end as usize] {
            let v = mesh.vertices[i as usize];
            assert_eq!(v.position[2], ROOM_DEPTH / 2.0);
            assert_eq!(v.normal, [0.0, 0.0, -1.0]);
        }
    }

    #[test]
    fn back_wall_top_row_maps_to_raster_top() {
        let mesh = BoxMesh::room(ROOM_WIDTH, ROOM_HEIGHT, ROOM_DEPTH);
        let first = BACK_WALL_FACE * 4;
        let top_left = mesh.vertices[first];
        assert_eq!(top_left.position[1], ROOM_HEIGHT / 2.0);
        assert_eq!(top_left.uv[1], 0.0);
    }
}
