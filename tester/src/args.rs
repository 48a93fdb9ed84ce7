use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Path to file with specified tests
    pub config_path: PathBuf,
    /// Path to the terrain-cli binary, relative to the config directory
    #[arg(long, default_value_os_t = PathBuf::from("../target/release/terrain-cli"))]
    pub cli: PathBuf,
    /// Replace reference images with the new output instead of comparing
    #[arg(long)]
    pub bless: bool,
    /// Highest accepted percentage error
    #[arg(long, default_value_t = 0.5)]
    pub tolerance: f32,
}
