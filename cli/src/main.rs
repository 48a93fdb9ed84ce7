use std::time::Instant;

use clap::Parser;
use thiserror::Error;

use terrain::circle::{self, CircleError};
use terrain::{Grid, GridError};

use terrain_common::description::{LoaderError, TerrainLoader};
use terrain_common::export::{self, ExportError};
use terrain_common::logging::{init_logging, LoggingConfig};

mod args;
mod renderer;

use args::Args;
use renderer::PreviewRenderer;

fn main() {
    let args = <Args as Parser>::parse();

    init_logging(LoggingConfig::from_flag(args.log.clone()));

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    if let Some(edges) = args.circle {
        return write_circle(edges, args);
    }

    let mut description = match &args.description {
        Some(path) => {
            log::info!("reading terrain description from {path:?}");
            TerrainLoader::load_from_path(path)?
        }
        None => TerrainLoader::defaults()?,
    };

    if args.grid_x.is_some() || args.grid_y.is_some() {
        description.grid = Grid::new(
            args.grid_x.unwrap_or(description.grid.x()),
            args.grid_y.unwrap_or(description.grid.y()),
        )?;
    }

    if let Some(seed) = args.seed {
        description.noise.seed = seed;
    }

    let start = Instant::now();
    let mesh = description.generate();

    log::info!(
        "generated {}x{} terrain ({} vertices, {} triangles) in {:.03} seconds",
        mesh.grid().x(),
        mesh.grid().y(),
        mesh.vertices().len(),
        mesh.indices().len() / 3,
        start.elapsed().as_secs_f64()
    );

    if let Some(path) = &args.obj {
        export::write_obj(&mesh, export::create(path)?)?;
        log::info!("wrote {path:?}");
    }

    if let Some(path) = &args.json {
        export::write_json(&mesh, export::create(path)?)?;
        log::info!("wrote {path:?}");
    }

    let renderer = PreviewRenderer {
        mode: args.mode.into(),
        scale: args.scale,
        threads: args.threads,
    };

    let preview = renderer.render(&mesh)?;
    export::write_png(&args.output, preview.width, preview.height, &preview.rgb)?;
    log::info!("wrote {:?}", args.output);

    Ok(())
}

fn write_circle(edges: u32, args: &Args) -> Result<(), CliError> {
    let circle = circle::fan(edges, circle::DEFAULT_RADIUS)?;

    let path = args.obj.clone().unwrap_or_else(|| "circle.obj".into());
    export::write_circle_obj(&circle, export::create(&path)?)?;
    log::info!("wrote {} edge circle to {path:?}", circle.edges());

    Ok(())
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read terrain description: {0}")]
    Loader(#[from] LoaderError),
    #[error("{0}")]
    Grid(#[from] GridError),
    #[error("{0}")]
    Circle(#[from] CircleError),
    #[error("could not write output: {0}")]
    Export(#[from] ExportError),
    #[error("could not build preview thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
