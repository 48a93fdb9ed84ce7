mod fbm;
mod perlin;

pub use fbm::Fbm;
pub use perlin::Perlin;

/// Height sampled over the plane.
pub trait HeightField: Send + Sync {
    fn height_at(&self, x: f32, y: f32) -> f32;
}

impl<F> HeightField for F
where
    F: Fn(f32, f32) -> f32 + Send + Sync,
{
    fn height_at(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}
