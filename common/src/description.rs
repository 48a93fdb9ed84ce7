use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use terrain::bands::BandsError;
use terrain::{Band, ColorBands, Fbm, Grid, GridError, MeshParams, TerrainGenerator, TerrainMesh};

const MAX_OCTAVES: u32 = 32;

/// Everything needed to regenerate one terrain.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainDescription {
    pub grid: Grid,
    pub noise: NoiseSettings,
    pub params: MeshParams,
}

impl TerrainDescription {
    pub fn generate(&self) -> TerrainMesh {
        TerrainGenerator::new(self.params.clone()).generate(self.grid, &self.noise.fbm())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSettings {
    pub seed: u64,
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
}

impl NoiseSettings {
    pub fn fbm(&self) -> Fbm {
        Fbm::new(self.seed)
            .with_octaves(self.octaves)
            .with_lacunarity(self.lacunarity)
            .with_gain(self.gain)
    }
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 6,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

pub struct TerrainLoader {}

impl TerrainLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<TerrainDescription, LoaderError> {
        let src = std::fs::read_to_string(path)?;

        Self::load_from_str(&src)
    }

    pub fn load_from_str(src: &str) -> Result<TerrainDescription, LoaderError> {
        let file: DescriptionFile = json5::from_str(src)?;

        build(file)
    }

    /// Description used when no file is given.
    pub fn defaults() -> Result<TerrainDescription, LoaderError> {
        build(DescriptionFile::default())
    }
}

fn build(file: DescriptionFile) -> Result<TerrainDescription, LoaderError> {
    let grid = Grid::new(file.grid.x, file.grid.y)?;

    let noise = file.noise;
    if noise.octaves > MAX_OCTAVES {
        return Err(LoaderError::Invalid(format!(
            "at most {MAX_OCTAVES} octaves are supported, got {}",
            noise.octaves
        )));
    }
    check_positive("lacunarity", noise.lacunarity)?;
    check_positive("gain", noise.gain)?;

    check_positive("sample_scale", file.mesh.sample_scale)?;
    if !file.mesh.height_scale.is_finite() {
        return Err(LoaderError::Invalid("height_scale must be finite".into()));
    }

    let bands = match file.bands {
        Some(stub) => {
            let colors = stub.colors.unwrap_or(Band::ALL.map(Band::default_color));
            ColorBands::new(stub.thresholds, colors)?
        }
        None => ColorBands::default(),
    };

    log::debug!("loaded terrain description: {}x{} grid, seed {}", grid.x(), grid.y(), noise.seed);

    Ok(TerrainDescription {
        grid,
        noise,
        params: MeshParams {
            sample_scale: file.mesh.sample_scale,
            height_scale: file.mesh.height_scale,
            bands,
        },
    })
}

fn check_positive(name: &str, value: f32) -> Result<(), LoaderError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LoaderError::Invalid(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("{0}")]
    InputError(#[from] std::io::Error),
    #[error("{0}")]
    FormatError(#[from] json5::Error),
    #[error("{0}")]
    Grid(#[from] GridError),
    #[error("{0}")]
    Bands(#[from] BandsError),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DescriptionFile {
    grid: GridStub,
    noise: NoiseSettings,
    mesh: MeshStub,
    bands: Option<BandsStub>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GridStub {
    x: u32,
    y: u32,
}

impl Default for GridStub {
    fn default() -> Self {
        Self { x: 128, y: 128 }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MeshStub {
    sample_scale: f32,
    height_scale: f32,
}

impl Default for MeshStub {
    fn default() -> Self {
        Self {
            sample_scale: 8.0,
            height_scale: 0.1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BandsStub {
    thresholds: [f32; 4],
    colors: Option<[[f32; 3]; 5]>,
}
