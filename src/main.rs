use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;

use eray_rtiow::prelude::{Engine, Point3, Scene, Sphere};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Small sphere in front of the camera, resting on a huge "ground" sphere.
fn create_scene() -> Scene {
    let mut scene = Scene::new();
    scene
        .add_object(Sphere::new(Point3::new(0., 0., -1.), 0.5))
        .add_object(Sphere::new(Point3::new(0., -100.5, -1.), 100.));
    scene
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.log_level.clone().into());
    info!("eray-rtiow {}", env!("CARGO_PKG_VERSION"));

    let config = args.render_config();
    let engine = Engine::new(config)
        .context("Invalid render settings")?
        .with_scene(create_scene());

    let format = args.format.clone().into();
    match &args.output {
        Some(path) => engine
            .render_to_path(path, format)
            .with_context(|| format!("Could not render to {path:?}"))?,
        None => engine
            .render_to_writer(io::stdout().lock(), format)
            .context("Could not render to stdout")?,
    }

    Ok(())
}
