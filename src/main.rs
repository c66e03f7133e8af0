use anyhow::Result;
use log::info;
use std::sync::Arc;
use winit::{event_loop::EventLoop, window::WindowBuilder};

mod app;
mod core;
mod engine;
mod game;

use app::App;
use engine::assets::AssetLoader;
use engine::audio::AudioSystem;
use engine::display::{apply_placement, monitor_rects, resolve_placement};
use engine::renderer::Renderer;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Desk Cat...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let placement = resolve_placement(&monitor_rects(&event_loop));
    let builder = WindowBuilder::new().with_title("Desk Cat");
    let window = Arc::new(apply_placement(builder, placement).build(&event_loop)?);

    info!("Window created successfully");

    let renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let audio = AudioSystem::new(&AssetLoader::from_env());

    let mut app = App::new(window, renderer, audio);

    // Main event loop
    event_loop
        .run(move |event, elwt| app.handle_event(event, elwt))
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
