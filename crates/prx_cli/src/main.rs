//! PRX - render a scene to an image file.

mod cli;
mod demo;
mod logger;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Args;
use crate::settings::SceneFile;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    let mut file = match &args.scene {
        Some(path) => {
            log::info!("Loading scene from {}", path.display());
            SceneFile::load(path)?
        }
        None => {
            log::info!("No scene file given, rendering the demo scene");
            SceneFile {
                scene: demo::demo_scene(),
                ..Default::default()
            }
        }
    };
    file.apply_args(&args);
    log::debug!("Camera: {:?}", file.camera);
    log::debug!("Render config: {:?}", file.render);

    let mut camera = file.camera.to_camera();
    camera
        .cast_rays(&file.scene, &file.render)
        .context("Render failed")?;

    let image = camera
        .take_image()
        .context("Camera finished without an image")?;
    image
        .to_rgb_image()
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("Wrote {}", args.output.display());
    Ok(())
}
