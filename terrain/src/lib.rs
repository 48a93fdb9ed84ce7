use once_cell::sync::Lazy;

pub mod bands;
pub mod circle;
pub mod grid;
pub mod mesh;
pub mod noise;
pub mod vertex;

pub use bands::{Band, ColorBands};
pub use grid::{Grid, GridError};
pub use mesh::{generate, MeshParams, TerrainGenerator, TerrainMesh};
pub use noise::{Fbm, HeightField, Perlin};
pub use vertex::Vertex;

/// Six octave fBm with seed 0, the height field used when nothing else is given.
pub static DEFAULT_FBM: Lazy<Fbm> = Lazy::new(Fbm::default);
