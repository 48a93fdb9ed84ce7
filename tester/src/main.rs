use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;
use thiserror::Error;

use terrain_common::logging::{init_logging, LoggingConfig};

mod args;
mod config;

use crate::config::Test;

fn main() {
    let args = <args::Args as Parser>::parse();

    init_logging(LoggingConfig {
        timestamps: true,
        ..Default::default()
    });

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    }
}

fn run(args: &args::Args) -> Result<bool, TesterError> {
    let config = std::fs::read_to_string(&args.config_path)?;
    let tests: config::Config = toml::from_str(&config)?;

    let test_path = get_test_path(&args.config_path)?;

    let mut passed = true;

    for test in &tests.test {
        log::info!("Testing {:?}", test.description_path);

        let output = execute_test(&test_path, &args.cli, test)?;

        if args.bless {
            std::fs::rename(
                test_path.join(&output),
                test_path.join(&test.original_image),
            )?;
            log::info!("Updated reference {:?}", test.original_image);
            continue;
        }

        let new_img = read_image(&test_path, &output)?;
        let old_img = read_image(&test_path, &test.original_image)?;

        let comp = compare(&new_img, &old_img)?;

        log::info!(
            "Total error: {}, percentage error: {}%",
            comp.total_err,
            comp.percentage_err
        );

        if comp.percentage_err > args.tolerance {
            log::warn!("{:?} differs from reference", test.description_path);
            passed = false;
        }
    }

    Ok(passed)
}

fn get_test_path(config_path: impl AsRef<Path>) -> Result<PathBuf, TesterError> {
    let path = config_path.as_ref().canonicalize()?;

    Ok(path
        .parent()
        .map(Path::to_owned)
        .unwrap_or_else(|| PathBuf::from(".")))
}

fn output_name(original: &Path) -> PathBuf {
    let mut file_name = original.file_stem().unwrap_or_default().to_owned();
    file_name.push("_output.");
    file_name.push(original.extension().unwrap_or_else(|| "png".as_ref()));

    original.with_file_name(file_name)
}

fn execute_test(wd: impl AsRef<Path>, cli: &Path, test: &Test) -> Result<PathBuf, TesterError> {
    let output_name = output_name(&test.original_image);

    let status = Command::new(cli)
        .current_dir(wd)
        .arg(&test.description_path)
        .args([
            "--mode",
            test.mode.as_str(),
            "--scale",
            test.scale.to_string().as_str(),
            "--output",
        ])
        .arg(&output_name)
        .status()?;

    if !status.success() {
        return Err(TesterError::CliFailed(test.description_path.clone()));
    }

    Ok(output_name)
}

fn read_image(
    test_path: impl AsRef<Path>,
    path: impl AsRef<Path>,
) -> Result<Vec<u8>, TesterError> {
    let file = File::open(test_path.as_ref().join(path))?;

    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    Ok(buf)
}

fn compare(new_img: &[u8], old_img: &[u8]) -> Result<Comparison, TesterError> {
    if new_img.len() != old_img.len() || new_img.is_empty() {
        return Err(TesterError::SizeMismatch);
    }

    let mut total_err = 0.0;

    for (n, o) in new_img.iter().zip(old_img.iter()) {
        total_err += n.abs_diff(*o) as f32 / 255.0;
    }

    let percentage_err = (total_err / new_img.len() as f32) * 100.0;

    Ok(Comparison {
        total_err,
        percentage_err,
    })
}

struct Comparison {
    pub total_err: f32,
    pub percentage_err: f32,
}

#[derive(Debug, Error)]
enum TesterError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config structure: {0}")]
    Config(#[from] toml::de::Error),
    #[error("{0}")]
    Decoding(#[from] png::DecodingError),
    #[error("terrain-cli failed for {0:?}")]
    CliFailed(PathBuf),
    #[error("image sizes do not match")]
    SizeMismatch,
}
