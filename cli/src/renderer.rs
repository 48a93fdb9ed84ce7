use std::time::Instant;

use rayon::prelude::*;

use terrain::TerrainMesh;
use terrain_common::shading::{to_rgb8, ShadingMode};

/// Top-down image of a terrain, one square of `scale` pixels per lattice
/// point, `+y` pointing up.
pub struct PreviewRenderer {
    pub mode: ShadingMode,
    pub scale: u32,
    pub threads: usize,
}

pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl PreviewRenderer {
    pub fn render(&self, mesh: &TerrainMesh) -> Result<Preview, rayon::ThreadPoolBuildError> {
        let grid = mesh.grid();
        let scale = self.scale.max(1);
        let width = (grid.x() + 1) * scale;
        let height = (grid.y() + 1) * scale;

        let row = width as usize * 3;
        let mut rgb = vec![0; row * height as usize];

        let start = Instant::now();

        if self.threads == 1 {
            for (y, slice) in rgb.chunks_mut(row).enumerate() {
                self.scanline(mesh, y, slice);
            }
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()?;

            pool.install(|| {
                rgb.par_chunks_mut(row)
                    .enumerate()
                    .for_each(|(y, slice)| self.scanline(mesh, y, slice))
            });
        }

        log::debug!(
            "{:?} preview {}x{} took {:.03} seconds",
            self.mode,
            width,
            height,
            start.elapsed().as_secs_f64()
        );

        Ok(Preview { width, height, rgb })
    }

    fn scanline(&self, mesh: &TerrainMesh, row: usize, slice: &mut [u8]) {
        let scale = self.scale.max(1);
        let lattice_y = mesh.grid().y() - row as u32 / scale;

        for (x, pixel) in slice.chunks_exact_mut(3).enumerate() {
            let vertex = mesh.vertex(x as u32 / scale, lattice_y);

            pixel.copy_from_slice(&to_rgb8(self.mode.shade(vertex)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use terrain::generate;

    fn slope(x: f32, _: f32) -> f32 {
        x
    }

    #[test]
    fn size_follows_grid_and_scale() {
        let mesh = generate(3, 2, &slope).unwrap();
        let renderer = PreviewRenderer {
            mode: ShadingMode::White,
            scale: 2,
            threads: 1,
        };

        let preview = renderer.render(&mesh).unwrap();

        assert_eq!((preview.width, preview.height), (8, 6));
        assert_eq!(preview.rgb.len(), 8 * 6 * 3);
        assert!(preview.rgb.iter().all(|c| *c == 255));
    }

    #[test]
    fn rows_are_flipped() {
        let mesh = generate(2, 2, &|_: f32, y: f32| y).unwrap();
        let renderer = PreviewRenderer {
            mode: ShadingMode::Color,
            scale: 1,
            threads: 1,
        };

        let preview = renderer.render(&mesh).unwrap();

        // top row is y = 2 (peak band), bottom row is y = 0 (deep band)
        let top = to_rgb8(ShadingMode::Color.shade(mesh.vertex(0, 2)));
        let bottom = to_rgb8(ShadingMode::Color.shade(mesh.vertex(2, 0)));

        assert_ne!(top, bottom);
        assert_eq!(&preview.rgb[0..3], &top);
        assert_eq!(&preview.rgb[preview.rgb.len() - 3..], &bottom);
    }

    #[test]
    fn parallel_matches_serial() {
        let mesh = generate(16, 9, &*terrain::DEFAULT_FBM).unwrap();

        let serial = PreviewRenderer {
            mode: ShadingMode::Lit,
            scale: 3,
            threads: 1,
        }
        .render(&mesh)
        .unwrap();

        let parallel = PreviewRenderer {
            mode: ShadingMode::Lit,
            scale: 3,
            threads: 4,
        }
        .render(&mesh)
        .unwrap();

        assert_eq!(serial.rgb, parallel.rgb);
    }
}
