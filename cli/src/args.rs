use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use terrain_common::shading::ShadingMode;

#[derive(Debug, Parser)]
#[command(about = "Generates a noise displaced terrain mesh and writes it to disk")]
pub struct Args {
    /// Path to terrain description (json5), built-in defaults when omitted
    pub description: Option<PathBuf>,
    /// Grid cells along x, overrides the description
    #[arg(long)]
    pub grid_x: Option<u32>,
    /// Grid cells along y, overrides the description
    #[arg(long)]
    pub grid_y: Option<u32>,
    /// Noise seed, overrides the description
    #[arg(long)]
    pub seed: Option<u64>,
    /// Shading of the preview image
    #[arg(short, long, value_enum, default_value_t = ShadingModeArg::Lit)]
    pub mode: ShadingModeArg,
    /// Preview pixels per lattice point
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,
    /// Threads to use for the preview (0 for automatic setting)
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,
    /// Path to save the preview image to
    #[arg(short, long, default_value_os_t = PathBuf::from("terrain.png"))]
    pub output: PathBuf,
    /// Path to save the mesh to as Wavefront OBJ
    #[arg(long)]
    pub obj: Option<PathBuf>,
    /// Path to save the mesh buffers to as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// Write a filled circle fan with this many edges to the OBJ path instead of a terrain
    #[arg(long)]
    pub circle: Option<u32>,
    /// Log filter, e.g. "debug" or "terrain=trace" (falls back to RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ShadingModeArg {
    White,
    TexCoord,
    Color,
    Normal,
    Lit,
}

impl From<ShadingModeArg> for ShadingMode {
    fn from(m: ShadingModeArg) -> Self {
        match m {
            ShadingModeArg::White => Self::White,
            ShadingModeArg::TexCoord => Self::TexCoord,
            ShadingModeArg::Color => Self::Color,
            ShadingModeArg::Normal => Self::Normal,
            ShadingModeArg::Lit => Self::Lit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["terrain-cli"]).unwrap();

        assert!(args.description.is_none());
        assert_eq!(args.scale, 4);
        assert_eq!(ShadingMode::from(args.mode), ShadingMode::Lit);
        assert_eq!(args.output, PathBuf::from("terrain.png"));
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "terrain-cli",
            "island.json5",
            "--grid-x",
            "64",
            "--seed",
            "5",
            "--mode",
            "tex-coord",
            "--obj",
            "island.obj",
        ])
        .unwrap();

        assert_eq!(args.description, Some(PathBuf::from("island.json5")));
        assert_eq!(args.grid_x, Some(64));
        assert_eq!(args.grid_y, None);
        assert_eq!(args.seed, Some(5));
        assert_eq!(ShadingMode::from(args.mode), ShadingMode::TexCoord);
        assert_eq!(args.obj, Some(PathBuf::from("island.obj")));
    }

    #[test]
    fn rejects_zero_scale() {
        assert!(Args::try_parse_from(["terrain-cli", "--scale", "0"]).is_err());
    }
}
