use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_EDGES: u32 = 1024 * 32;
pub const DEFAULT_RADIUS: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Filled disc built as a triangle fan around the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMesh {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl CircleMesh {
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn edges(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Builds a fan with `edges` rim vertices.
///
/// Rim vertex `i` sits at `360 / edges * i` degrees, measured clockwise from
/// `+y`. The last triangle closes back onto the first rim vertex.
pub fn fan(edges: u32, radius: f32) -> Result<CircleMesh, CircleError> {
    if edges < 3 {
        return Err(CircleError::TooFewEdges(edges));
    }

    if !radius.is_finite() || radius <= 0.0 {
        return Err(CircleError::InvalidRadius(radius));
    }

    let mut positions = Vec::with_capacity(edges as usize + 1);
    let mut indices = Vec::with_capacity(edges as usize * 3);

    positions.push([0.0; 3]);

    let step = 360.0 / edges as f64;

    for i in 0..edges {
        let angle = (step * i as f64).to_radians();

        positions.push([
            (angle.sin() * radius as f64) as f32,
            (angle.cos() * radius as f64) as f32,
            0.0,
        ]);

        let next = if i == edges - 1 { 1 } else { i + 2 };
        indices.extend_from_slice(&[0, i + 1, next]);
    }

    log::debug!("generated circle fan with {edges} edges");

    Ok(CircleMesh { positions, indices })
}

#[derive(Debug, Error, PartialEq)]
pub enum CircleError {
    #[error("a circle needs at least 3 edges, got {0}")]
    TooFewEdges(u32),
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_fan() {
        let circle = fan(4, 1.0).unwrap();

        assert_eq!(circle.edges(), 4);
        assert_eq!(circle.positions()[0], [0.0, 0.0, 0.0]);
        assert_eq!(circle.positions()[1], [0.0, 1.0, 0.0]);

        let quarter = circle.positions()[2];
        assert!((quarter[0] - 1.0).abs() < 1e-6);
        assert!(quarter[1].abs() < 1e-6);

        assert_eq!(circle.indices(), &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
    }

    #[test]
    fn rim_lies_on_radius() {
        let circle = fan(360, DEFAULT_RADIUS).unwrap();

        for p in &circle.positions()[1..] {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - DEFAULT_RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn counts() {
        let circle = fan(DEFAULT_EDGES, DEFAULT_RADIUS).unwrap();

        assert_eq!(circle.positions().len(), DEFAULT_EDGES as usize + 1);
        assert_eq!(circle.indices().len(), DEFAULT_EDGES as usize * 3);
        assert!(circle
            .indices()
            .iter()
            .all(|i| (*i as usize) < circle.positions().len()));
    }

    #[test]
    fn rejects_degenerate() {
        assert_eq!(fan(2, 1.0), Err(CircleError::TooFewEdges(2)));
        assert_eq!(fan(8, 0.0), Err(CircleError::InvalidRadius(0.0)));
    }
}
