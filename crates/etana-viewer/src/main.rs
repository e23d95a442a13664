//! Single-mesh model viewer with a free fly camera.
//!
//! WASD moves, the mouse looks, the wheel zooms, Escape quits.

mod app;
mod shapes;

use std::path::PathBuf;

use anyhow::{Context, Result};

use etana_engine::assets::load_shader_pair;
use etana_engine::device::GpuInit;
use etana_engine::logging::{init_logging, LoggingConfig};
use etana_engine::window::{Runtime, RuntimeConfig};

use app::ViewerApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let shader_dir = shader_dir();
    log::info!("loading shaders from {}", shader_dir.display());

    let shaders = load_shader_pair(
        shader_dir.join("model.vert.wgsl"),
        shader_dir.join("model.frag.wgsl"),
    )
    .context("cannot start without shader sources")?;

    let config = RuntimeConfig {
        title: "etana viewer".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), ViewerApp::new(shaders, shapes::piston_model()))
}

/// Shader directory resolution: CLI argument, then ETANA_SHADER_DIR, then
/// the assets shipped next to this crate.
fn shader_dir() -> PathBuf {
    if let Some(arg) = std::env::args().nth(1) {
        return PathBuf::from(arg);
    }
    if let Ok(dir) = std::env::var("ETANA_SHADER_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("shaders")
}
