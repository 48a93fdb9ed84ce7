use cgmath::{Array, InnerSpace, Vector3, Zero};
use serde::{Deserialize, Serialize};

use terrain::Vertex;

/// Debug views of a terrain vertex.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    #[default]
    White,
    TexCoord,
    Color,
    Normal,
    Lit,
}

impl ShadingMode {
    pub const ALL: [ShadingMode; 5] = [
        ShadingMode::White,
        ShadingMode::TexCoord,
        ShadingMode::Color,
        ShadingMode::Normal,
        ShadingMode::Lit,
    ];

    /// Mode bound to number key `index`; anything unknown shows plain white.
    pub fn from_index(index: u32) -> Self {
        Self::ALL
            .get(index as usize)
            .copied()
            .unwrap_or(ShadingMode::White)
    }

    pub fn shade(&self, vertex: &Vertex) -> Vector3<f32> {
        match self {
            ShadingMode::White => Vector3::from_value(1.0),
            ShadingMode::TexCoord => {
                let [s, t] = vertex.tex_coord;
                Vector3::new(s.fract(), t.fract(), 0.0)
            }
            ShadingMode::Color => Vector3::from(vertex.color),
            ShadingMode::Normal => normalized(vertex.normal()),
            ShadingMode::Lit => {
                let light = Vector3::new(1.0, 0.0, 1.0).normalize();
                let diffuse = normalized(vertex.normal()).dot(light).max(0.2);

                Vector3::from(vertex.color) * diffuse
            }
        }
    }
}

fn normalized(v: Vector3<f32>) -> Vector3<f32> {
    if v.is_zero() {
        v
    } else {
        v.normalize()
    }
}

/// Maps a shaded color to 8-bit channels, clamping to `[0, 1]`.
pub fn to_rgb8(color: Vector3<f32>) -> [u8; 3] {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

    [channel(color.x), channel(color.y), channel(color.z)]
}
