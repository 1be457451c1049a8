use anyhow::Error;
use log::info;
use scene::Scene;
use std::env;
use std::io::{self, Write as _};
use std::path::PathBuf;

mod report;
mod scene;

/// Lay out a scene file (or the built-in sample) and print every final frame.
///
/// Usage: `flow_demo [scene.json]`
///
/// # Errors
/// Returns an error if the scene cannot be loaded or stdout cannot be written.
pub fn main() -> Result<(), Error> {
    env_logger::init();

    let scene = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("Loading scene {}", path.display());
            Scene::load(&path)?
        }
        None => {
            info!("No scene given; using the built-in sample");
            Scene::sample()
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(report::render_report(&scene).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
