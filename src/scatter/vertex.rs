use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::mesh::face::Face;
use crate::scatter::FaceAnimation;

/// GPU-uploadable vertex carrying its face's animation attributes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable, Default, PartialEq)]
pub struct ScatterVertex {
    pub position: [f32; 3],
    /// Delay and duration
    pub animation: [f32; 2],
    pub centroid: [f32; 3],
    pub control0: [f32; 3],
    pub control1: [f32; 3],
    pub end_position: [f32; 3],
}

/// Where one attribute lives inside a [`ScatterVertex`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub location: u32,
    pub components: u32,
    pub offset: usize,
}

impl ScatterVertex {
    pub fn for_face(face: &Face, animation: &FaceAnimation) -> [ScatterVertex; 3] {
        let FaceAnimation {
            delay,
            duration,
            centroid,
            control0,
            control1,
            end_position,
        } = *animation;
        face.vertices.map(|vertex| ScatterVertex {
            position: vertex.to_array(),
            animation: [delay, duration],
            centroid: centroid.to_array(),
            control0: control0.to_array(),
            control1: control1.to_array(),
            end_position: end_position.to_array(),
        })
    }

    pub fn buffer(faces: &[Face], animations: &[FaceAnimation]) -> Vec<ScatterVertex> {
        faces
            .iter()
            .zip(animations)
            .flat_map(|(face, animation)| ScatterVertex::for_face(face, animation))
            .collect()
    }

    pub const ATTRIBUTES: [VertexAttribute; 6] = [
        VertexAttribute {
            name: "position",
            location: 0,
            components: 3,
            offset: offset_of!(ScatterVertex, position),
        },
        VertexAttribute {
            name: "animation",
            location: 1,
            components: 2,
            offset: offset_of!(ScatterVertex, animation),
        },
        VertexAttribute {
            name: "centroid",
            location: 2,
            components: 3,
            offset: offset_of!(ScatterVertex, centroid),
        },
        VertexAttribute {
            name: "control0",
            location: 3,
            components: 3,
            offset: offset_of!(ScatterVertex, control0),
        },
        VertexAttribute {
            name: "control1",
            location: 4,
            components: 3,
            offset: offset_of!(ScatterVertex, control1),
        },
        VertexAttribute {
            name: "end_position",
            location: 5,
            components: 3,
            offset: offset_of!(ScatterVertex, end_position),
        },
    ];

    pub const STRIDE: usize = size_of::<ScatterVertex>();

    pub fn as_bytes(vertices: &[ScatterVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
