//! Oval Studio
//!
//! Lays out the six showcase buttons on a tiled panel, replays a scripted
//! pointer session through the UI scene and writes every frame as PNG, plus
//! an SVG of the hit regions.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use oval_engine::logging::{init_logging, BufferedLog, LoggingConfig, SinkConfig};
use oval_engine::raster::Canvas;
use oval_ui::prelude::*;

mod assets;
mod session;
mod showcase;
mod svg;

#[derive(Parser, Debug)]
#[command(name = "oval-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Oval and capsule button showcase, rendered offscreen", long_about = None)]
struct Args {
    /// Directory receiving frames and the hit-region SVG
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Image tiled across the panel (procedural stone when omitted)
    #[arg(long)]
    background: Option<PathBuf>,

    /// Image used by the image-filled buttons (procedural gradient when omitted)
    #[arg(long)]
    button_image: Option<PathBuf>,

    /// Directory for the session log file (console only when omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Do not echo the session log to stdout
    #[arg(short, long)]
    quiet: bool,
}

/// Window position on the virtual screen. Events are delivered in screen space.
const SCREEN_ORIGIN: Vec2 = Vec2::new(120.0, 80.0);

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::default());

    let journal = Rc::new(RefCell::new(BufferedLog::new()));
    journal.borrow_mut().start(SinkConfig { console: !args.quiet, file_dir: args.log_dir.clone() });

    let result = run(&args, &journal);
    if let Err(e) = &result {
        journal.borrow_mut().record(&format!("{e:#}"), log::Level::Error);
    }
    journal.borrow_mut().stop();
    result
}

fn run(args: &Args, journal: &Rc<RefCell<BufferedLog>>) -> Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let tile = assets::load_or(args.background.as_deref(), assets::stone_tile)?;
    let face = assets::load_or(args.button_image.as_deref(), assets::gradient_face)?;

    let viewport = Vec2::new(args.width as f32, args.height as f32);
    let layout = showcase::layout(viewport);
    let mut root = Element::new(showcase::build(&layout, tile, face, journal));

    svg::write_hit_regions(&layout, viewport, &args.out_dir.join("hit_regions.svg"))?;

    let mut ui = UiScene::new().with_screen_origin(SCREEN_ORIGIN);
    let mut canvas = Canvas::new(args.width, args.height);

    for (i, step) in session::script(&layout).iter().enumerate() {
        let list = ui.frame(&mut root, viewport, &step.input);
        canvas.clear(Color::transparent());
        canvas.render(list);

        let path = args.out_dir.join(format!("frame_{i:02}_{}.png", step.label));
        canvas.save_png(&path)?;
        log::info!("wrote {}", path.display());

        journal.borrow_mut().record(&format!("frame {i:02}: {}", step.label), log::Level::Debug);
        journal.borrow_mut().flush();
    }

    journal.borrow_mut().info("Session finished.");
    Ok(())
}
