use cgmath::{InnerSpace, Vector3};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[rustfmt::skip]
const GRADIENTS: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0], [1.0, -1.0, 0.0], [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0], [0.0, -1.0, 1.0], [0.0, 1.0, -1.0], [0.0, -1.0, -1.0],
];

///
/// Improved gradient noise over a seeded permutation table.
///
/// Values are zero on integer lattice points and stay within `[-2, 2]`.
///
#[derive(Clone, Debug)]
pub struct Perlin {
    permutation: [u8; 512],
}

impl Perlin {
    pub fn new(seed: u64) -> Self {
        let mut table = (0..=255_u8).collect::<Vec<_>>();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        table.shuffle(&mut rng);

        let mut permutation = [0; 512];
        for (i, p) in permutation.iter_mut().enumerate() {
            *p = table[i & 255];
        }

        Self { permutation }
    }

    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self.sample_octave(x, y, z, 0)
    }

    /// Sample with lookups shifted by `octave`, so stacked octaves don't share
    /// the same gradient pattern.
    pub fn sample_octave(&self, x: f32, y: f32, z: f32, octave: u8) -> f32 {
        let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
        let (fx, fy, fz) = (x - x0, y - y0, z - z0);
        let (ix, iy, iz) = (x0 as i32, y0 as i32, z0 as i32);

        let mut corners = [[[0.0_f32; 2]; 2]; 2];

        for dx in 0..2 {
            for dy in 0..2 {
                for dz in 0..2 {
                    let gradient = GRADIENTS[self.hash(
                        ix.wrapping_add(dx as i32),
                        iy.wrapping_add(dy as i32),
                        iz.wrapping_add(dz as i32),
                        octave,
                    )];

                    let offset = Vector3::new(fx - dx as f32, fy - dy as f32, fz - dz as f32);

                    corners[dx][dy][dz] = Vector3::from(gradient).dot(offset);
                }
            }
        }

        let (u, v, w) = (fade(fx), fade(fy), fade(fz));

        let x00 = lerp(corners[0][0][0], corners[1][0][0], u);
        let x10 = lerp(corners[0][1][0], corners[1][1][0], u);
        let x01 = lerp(corners[0][0][1], corners[1][0][1], u);
        let x11 = lerp(corners[0][1][1], corners[1][1][1], u);

        let y0 = lerp(x00, x10, v);
        let y1 = lerp(x01, x11, v);

        lerp(y0, y1, w)
    }

    fn hash(&self, x: i32, y: i32, z: i32, octave: u8) -> usize {
        let p = &self.permutation;

        let a = p[(x & 255) as usize + octave as usize] as usize;
        let b = p[a + (y & 255) as usize] as usize;
        let c = p[b + (z & 255) as usize] as usize;

        c % GRADIENTS.len()
    }
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_on_lattice_points() {
        let noise = Perlin::new(7);

        for x in -3..3 {
            for y in -3..3 {
                assert_eq!(noise.sample(x as f32, y as f32, 0.0), 0.0);
            }
        }
    }

    #[test]
    fn same_seed_same_noise() {
        let a = Perlin::new(42);
        let b = Perlin::new(42);

        for i in 0..100 {
            let p = i as f32 * 0.173;
            assert_eq!(
                a.sample(p, p * 0.5, 0.0).to_bits(),
                b.sample(p, p * 0.5, 0.0).to_bits()
            );
        }
    }

    #[test]
    fn seeds_differ() {
        let a = Perlin::new(1);
        let b = Perlin::new(2);

        let differs = (0..100).any(|i| {
            let p = i as f32 * 0.37 + 0.11;
            a.sample(p, -p, 0.5) != b.sample(p, -p, 0.5)
        });

        assert!(differs);
    }

    #[test]
    fn bounded() {
        let noise = Perlin::new(0);

        for i in 0..2000 {
            let p = i as f32 * 0.0123 - 10.0;
            let value = noise.sample_octave(p, p * 1.7, p * 0.3, (i % 6) as u8);
            assert!(value.abs() <= 2.0, "{value} out of range");
        }
    }

    #[test]
    fn continuous() {
        let noise = Perlin::new(3);

        let a = noise.sample(0.5, 0.5, 0.0);
        let b = noise.sample(0.5001, 0.5, 0.0);

        assert!((a - b).abs() < 0.01);
    }
}
