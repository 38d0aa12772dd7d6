use anyhow::Result;
use glint_renderer::{render, render_with_threads, Camera, RenderConfig};

mod cli;
mod logger;
mod output;
mod scenes;

use cli::{Args, DISABLED_SCENE};
use logger::init_logger;
use output::save_image;
use scenes::{BustAssets, ScenePreset};

fn main() -> Result<()> {
    let args = Args::parse_lenient(std::env::args_os());
    init_logger(args.log_level.clone().into());

    let result = run(&args);
    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    result
}

fn run(args: &Args) -> Result<()> {
    if args.scene == DISABLED_SCENE {
        log::info!("Scene {} is disabled, nothing to render", DISABLED_SCENE);
        return Ok(());
    }

    log::info!("Starting Glint (scene {})", args.scene);

    let preset = match args.scene {
        1 => scenes::spheres(),
        _ => scenes::bust(&BustAssets {
            envmap: &args.envmap,
            mesh: &args.mesh,
        })?,
    };

    let ScenePreset {
        scene,
        background,
        environment,
        tone_map,
    } = preset;

    let camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_fov(args.fov);

    let config = RenderConfig {
        max_depth: args.max_depth,
        background,
        environment,
        supersample: args.supersample,
        ..RenderConfig::default()
    };

    let mut image = match args.threads {
        Some(threads) => render_with_threads(&camera, &scene, &config, threads)?,
        None => render(&camera, &scene, &config),
    };

    if tone_map {
        image.tone_map();
    }

    save_image(&image, &args.out)?;

    log::info!("end.");
    Ok(())
}
