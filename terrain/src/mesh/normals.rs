use cgmath::Vector3;

use crate::grid::Grid;
use crate::vertex::Vertex;

/// Storage indices of the axis neighbours of a lattice point. A neighbour
/// outside the grid is replaced by the point itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Neighbours {
    pub center: u32,
    pub left: u32,
    pub right: u32,
    pub down: u32,
    pub up: u32,
}

pub fn neighbours(grid: Grid, x: u32, y: u32) -> Neighbours {
    let center = grid.index_of(x, y);

    let left = if x == 0 { center } else { grid.index_of(x - 1, y) };
    let right = if x == grid.x() { center } else { grid.index_of(x + 1, y) };
    let down = if y == 0 { center } else { grid.index_of(x, y - 1) };
    let up = if y == grid.y() { center } else { grid.index_of(x, y + 1) };

    Neighbours {
        center,
        left,
        right,
        down,
        up,
    }
}

/// Normal of a surface with the given slopes.
///
/// Divides by `sqrt(1 + dx² + dy²)` instead of running a generic normalize;
/// lighting computed from these normals depends on that exact expression.
pub fn slope_normal(dz_dx: f32, dz_dy: f32) -> Vector3<f32> {
    let length = (1.0 + dz_dx * dz_dx + dz_dy * dz_dy).sqrt();

    Vector3::new(-dz_dx / length, -dz_dy / length, 1.0 / length)
}

pub(super) fn estimate(grid: Grid, vertices: &mut [Vertex]) {
    for (x, y) in grid.points() {
        let n = neighbours(grid, x, y);

        let left = vertices[n.left as usize].position();
        let right = vertices[n.right as usize].position();
        let down = vertices[n.down as usize].position();
        let up = vertices[n.up as usize].position();

        let dz_dx = (right.z - left.z) / (right.x - left.x);
        let dz_dy = (up.z - down.z) / (up.y - down.y);

        vertices[n.center as usize].normal = slope_normal(dz_dx, dz_dy).into();
    }
}
