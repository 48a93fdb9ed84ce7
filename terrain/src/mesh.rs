use serde::Serialize;

use crate::bands::ColorBands;
use crate::grid::{Grid, GridError};
use crate::noise::HeightField;
use crate::vertex::Vertex;

mod normals;

pub use normals::{neighbours, slope_normal, Neighbours};

/// Mapping from lattice to height field and from height to geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshParams {
    /// Multiplier applied to the centered `[-0.5, 0.5]` coordinates before sampling.
    pub sample_scale: f32,
    /// Multiplier from sampled height to the `z` of the vertex.
    pub height_scale: f32,
    pub bands: ColorBands,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            sample_scale: 8.0,
            height_scale: 0.1,
            bands: ColorBands::default(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct TerrainGenerator {
    params: MeshParams,
}

impl TerrainGenerator {
    pub fn new(params: MeshParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    pub fn generate<H>(&self, grid: Grid, field: &H) -> TerrainMesh
    where
        H: HeightField + ?Sized,
    {
        let mut vertices = self.lattice(grid, field);
        normals::estimate(grid, &mut vertices);
        let indices = triangulate(grid);

        log::debug!(
            "generated {}x{} terrain: {} vertices, {} indices",
            grid.x(),
            grid.y(),
            vertices.len(),
            indices.len()
        );

        TerrainMesh {
            grid,
            vertices,
            indices,
        }
    }

    fn lattice<H>(&self, grid: Grid, field: &H) -> Vec<Vertex>
    where
        H: HeightField + ?Sized,
    {
        let MeshParams {
            sample_scale,
            height_scale,
            bands,
        } = &self.params;

        let mut vertices = Vec::with_capacity(grid.vertex_count());

        for (x, y) in grid.points() {
            let u = x as f32 / grid.x() as f32 - 0.5;
            let v = y as f32 / grid.y() as f32 - 0.5;

            let height = field.height_at(u * sample_scale, v * sample_scale);

            vertices.push(Vertex {
                position: [u, v, height * height_scale],
                tex_coord: [x as f32, y as f32],
                color: bands.color_for(height),
                normal: [0.0; 3],
            });
        }

        vertices
    }
}

/// Generates a terrain with the default parameters.
pub fn generate<H>(grid_x: u32, grid_y: u32, field: &H) -> Result<TerrainMesh, GridError>
where
    H: HeightField + ?Sized,
{
    let grid = Grid::new(grid_x, grid_y)?;

    Ok(TerrainGenerator::default().generate(grid, field))
}

/// Two triangles per cell, counter-clockwise seen from `+z`.
pub fn triangulate(grid: Grid) -> Vec<u32> {
    let mut indices = Vec::with_capacity(grid.index_count());

    for y in 1..=grid.y() {
        for x in 1..=grid.x() {
            let bot_left = grid.index_of(x - 1, y - 1);
            let top_left = grid.index_of(x - 1, y);
            let bot_right = grid.index_of(x, y - 1);
            let top_right = grid.index_of(x, y);

            indices.extend_from_slice(&[bot_left, top_left, bot_right]);
            indices.extend_from_slice(&[bot_right, top_left, top_right]);
        }
    }

    indices
}

/// Immutable vertex and index buffers of one generated terrain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainMesh {
    grid: Grid,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex at lattice point `(x, y)`, panics outside the lattice.
    pub fn vertex(&self, x: u32, y: u32) -> &Vertex {
        &self.vertices[self.grid.index_of(x, y) as usize]
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Vertex> {
        if self.grid.contains(x, y) {
            Some(self.vertex(x, y))
        } else {
            None
        }
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}
