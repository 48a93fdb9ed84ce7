use super::{HeightField, Perlin};

/// Fractal sum of [`Perlin`] octaves.
#[derive(Clone, Debug)]
pub struct Fbm {
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
    noise: Perlin,
}

impl Fbm {
    pub fn new(seed: u64) -> Self {
        Self {
            octaves: 6,
            lacunarity: 2.0,
            gain: 0.5,
            noise: Perlin::new(seed),
        }
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut sum = 0.0;

        for octave in 0..self.octaves {
            sum += self.noise.sample_octave(
                x * frequency,
                y * frequency,
                z * frequency,
                octave as u8,
            ) * amplitude;

            frequency *= self.lacunarity;
            amplitude *= self.gain;
        }

        sum
    }
}

impl Default for Fbm {
    fn default() -> Self {
        Self::new(0)
    }
}

impl HeightField for Fbm {
    fn height_at(&self, x: f32, y: f32) -> f32 {
        self.sample(x, y, 0.0)
    }
}
