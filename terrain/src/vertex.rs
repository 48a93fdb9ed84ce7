use bytemuck::{Pod, Zeroable};
use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// One interleaved terrain vertex, laid out the way an indexed draw call
/// expects it: position, texture coordinate, color, normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
    pub color: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [VertexAttribute; 4] = [
        VertexAttribute::Vec3,
        VertexAttribute::Vec2,
        VertexAttribute::Vec3,
        VertexAttribute::Vec3,
    ];

    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    pub fn position(&self) -> Vector3<f32> {
        Vector3::from(self.position)
    }

    pub fn normal(&self) -> Vector3<f32> {
        Vector3::from(self.normal)
    }

    /// `(location, attribute, byte offset)` for every attribute.
    pub fn layout() -> impl Iterator<Item = (u32, VertexAttribute, usize)> {
        Self::ATTRIBUTES
            .into_iter()
            .enumerate()
            .scan(0, |offset, (location, attr)| {
                let current = *offset;
                *offset += attr.size() * std::mem::size_of::<f32>();
                Some((location as u32, attr, current))
            })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VertexAttribute {
    Float,
    Vec2,
    Vec3,
}

impl VertexAttribute {
    /// Component count.
    pub const fn size(&self) -> usize {
        match self {
            VertexAttribute::Float => 1,
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}
