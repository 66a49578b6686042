use config::ConfigLoader;
use easel::anyhow::Result;
use easel::app::ApplicationContext;
use easel::mandelbrot::MandelbrotSet;
use easel::renderer::recording::RecordingRenderer;
use easel::window::scripted::ScriptedInput;
use log::info;
use scenes::fourier::FourierScene;
use scenes::line::LineScene;
use scenes::raycast::RaycastScene;
use scenes::rotation::RotationScene;
use scenes::shooter::ShooterScene;
use scenes::GlobalData;
use scenes::FIXED_DELTA;
use std::env;
use std::fs;

pub mod config;
pub mod scenes;

fn main() {
    main_internal().unwrap();
}

fn main_internal() -> Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "playground.json".to_string());
    let mut loader = ConfigLoader::new(&path);
    loader.reload();

    let config = loader.data;
    let input = ScriptedInput::new(config.script());
    let renderer = RecordingRenderer::new(config.viewport_size);

    let mut app = ApplicationContext::<GlobalData, _, _>::new(input, renderer)
        .with_scene("raycast", Box::<RaycastScene>::default())?
        .with_scene("line", Box::<LineScene>::default())?
        .with_scene("fourier", Box::<FourierScene>::default())?
        .with_scene("shooter", Box::<ShooterScene>::default())?
        .with_scene("rotation", Box::<RotationScene>::default())?;

    app.frame_delta = Some(FIXED_DELTA);
    app.global.config = config.clone();
    app.run(&config.scene)?;

    let stats = &app.global.stats;
    info!(
        "Finished after {} frames: {} polygons spawned, {} rays cast, {} bullets fired, {} scene changes",
        app.frames, stats.polygons_spawned, stats.rays_cast, stats.bullets_fired, stats.scene_changes
    );

    if let Some(output) = &config.mandelbrot_output {
        let mut mandelbrot = MandelbrotSet::new(config.window_size().x as u32, config.window_size().y as u32);
        mandelbrot.max_iterations = config.max_iterations;

        fs::write(output, mandelbrot.render().to_png()?)?;
        info!("Mandelbrot set saved to {}", output);
    }

    Ok(())
}
