use serde::Serialize;
use thiserror::Error;

/// Cell counts of a regular grid.
///
/// A grid of `x * y` cells has `(x + 1) * (y + 1)` lattice points, stored
/// row-major: point `(x, y)` lives at `y * (x_cells + 1) + x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    x: u32,
    y: u32,
}

impl Grid {
    pub fn new(x: u32, y: u32) -> Result<Self, GridError> {
        if x == 0 || y == 0 {
            return Err(GridError::ZeroDimension { x, y });
        }

        let points = (x as u64 + 1) * (y as u64 + 1);
        if points > u32::MAX as u64 {
            return Err(GridError::TooLarge { x, y });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    /// Points per row.
    pub fn stride(&self) -> usize {
        self.x as usize + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.stride() * (self.y as usize + 1)
    }

    pub fn cell_count(&self) -> usize {
        self.x as usize * self.y as usize
    }

    pub fn index_count(&self) -> usize {
        6 * self.cell_count()
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x <= self.x && y <= self.y
    }

    /// Row-major vertex index of lattice point `(x, y)`.
    ///
    /// Panics if the point lies outside the lattice.
    pub fn index_of(&self, x: u32, y: u32) -> u32 {
        assert!(
            self.contains(x, y),
            "lattice point ({x}, {y}) outside {}x{} grid",
            self.x,
            self.y
        );

        y * (self.x + 1) + x
    }

    /// Lattice points in storage order.
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> {
        let (width, height) = (self.x, self.y);

        (0..=height).flat_map(move |y| (0..=width).map(move |x| (x, y)))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {x}x{y}")]
    ZeroDimension { x: u32, y: u32 },
    #[error("grid {x}x{y} has more points than a 32-bit index buffer can address")]
    TooLarge { x: u32, y: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(Grid::new(0, 4), Err(GridError::ZeroDimension { x: 0, y: 4 }));
        assert_eq!(Grid::new(4, 0), Err(GridError::ZeroDimension { x: 4, y: 0 }));
        assert!(Grid::new(u32::MAX, 2).is_err());
    }

    #[test]
    fn counts() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(grid.stride(), 4);
        assert_eq!(grid.vertex_count(), 12);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.index_count(), 36);
    }

    #[test]
    fn points_are_row_major() {
        let grid = Grid::new(2, 1).unwrap();

        let points = grid.points().collect::<Vec<_>>();

        assert_eq!(points, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);

        for (i, (x, y)) in points.into_iter().enumerate() {
            assert_eq!(grid.index_of(x, y) as usize, i);
        }
    }

    #[test]
    fn contains_lattice_edges() {
        let grid = Grid::new(2, 3).unwrap();

        assert!(grid.contains(2, 3));
        assert!(!grid.contains(3, 0));
        assert!(!grid.contains(0, 4));
    }

    #[test]
    #[should_panic(expected = "lattice point (3, 0) outside 2x2 grid")]
    fn index_past_row_end_panics() {
        Grid::new(2, 2).unwrap().index_of(3, 0);
    }
}
