use std::path::{Path, PathBuf};

use clap::Parser;

use trispiral::colors;
use trispiral::prelude::*;

/// Draw a spiral of nested triangles.
///
/// Each triangle is obtained from the previous one by moving every vertex a
/// fraction `q` of the way along its edge.
#[derive(Parser)]
#[command(name = "trispiral")]
#[command(about = "Draw a spiral of nested triangles", long_about = None)]
#[command(version)]
struct Args {
    /// Fraction of side length each vertex moves per step (0 < q < 1)
    #[arg(short, long, default_value_t = DEFAULT_Q, allow_negative_numbers = true)]
    q: f64,

    /// Number of triangles to draw
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIANGLE_COUNT)]
    count: usize,

    /// Window (or image) width in pixels
    #[arg(
        long,
        default_value_t = WINDOW_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64)
    )]
    width: u32,

    /// Window (or image) height in pixels
    #[arg(
        long,
        default_value_t = WINDOW_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64)
    )]
    height: u32,

    /// Render once to this image file instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging filter, e.g. "debug" or "trispiral=trace" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let config = SpiralConfig::new(args.q)
        .map_err(|e| e.to_string())?
        .with_count(args.count);
    let renderer = Renderer::new(GeometryEngine::new(config));
    log::info!(
        "spiral of {} triangles, q = {}, p = {}",
        config.count(),
        config.q(),
        config.p()
    );

    match &args.output {
        Some(path) => export(&renderer, path, args.width, args.height),
        None => run_window(&renderer, args.width, args.height),
    }
}

fn paint(renderer: &Renderer, frame: &mut FrameBuffer) {
    frame.clear(colors::BACKGROUND);
    renderer.render(frame);
}

fn export(renderer: &Renderer, path: &Path, width: u32, height: u32) -> Result<(), String> {
    let mut frame = FrameBuffer::new(width, height).map_err(|e| e.to_string())?;
    paint(renderer, &mut frame);
    frame.save_png(path).map_err(|e| e.to_string())?;
    log::info!("wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

fn run_window(renderer: &Renderer, width: u32, height: u32) -> Result<(), String> {
    let title = format!(
        "Triangles: {} triangles inside each other",
        renderer.engine().config().count()
    );
    let mut window = Window::new(&title, width, height)?;
    let mut frame = FrameBuffer::new(width, height).map_err(|e| e.to_string())?;
    let mut needs_repaint = true;

    loop {
        if needs_repaint {
            paint(renderer, &mut frame);
            window.present(&frame)?;
            needs_repaint = false;
        }

        match window.wait_event() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                log::info!("window resized to {}x{}", w, h);
                frame.resize(w, h).map_err(|e| e.to_string())?;
                needs_repaint = true;
            }
            WindowEvent::Exposed => needs_repaint = true,
        }
    }

    log::info!("window closed");
    Ok(())
}
