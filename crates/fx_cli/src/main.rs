//! FX CLI
//!
//! Run the demo scene headlessly and export the final frame.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fx_core::PixelSurface;
use fx_director::{Director, FrameLoop, IntervalLoop, ManualLoop};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod scene;

use config::FxFile;

#[derive(Parser)]
#[command(name = "fx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FX animation director CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scene file (defaults to ./fx.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo scene
    Run {
        /// Stop after this many frames even if the scene is still going
        #[arg(short, long, default_value = "600")]
        frames: u64,

        /// Frame rate
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Pace frames in real time instead of stepping as fast as possible
        #[arg(long)]
        realtime: bool,

        /// Override the particle count from the scene file
        #[arg(long)]
        particles: Option<u32>,

        /// Write the last rendered frame as PNG
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let file = FxFile::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            frames,
            fps,
            realtime,
            particles,
            output,
        } => cmd_run(file, frames, fps, realtime, particles, output),
        Commands::Config => {
            print!("{}", file.to_toml_string()?);
            Ok(())
        }
    }
}

fn cmd_run(
    mut file: FxFile,
    max_frames: u64,
    fps: u32,
    realtime: bool,
    particles: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    if let Some(count) = particles {
        file.scene.particles = count;
    }
    if fps == 0 {
        warn!("--fps 0 runs uncapped with zero-length frames in fixed-step mode");
    }

    let canvas = file.director.canvas_size;
    let surface = Rc::new(RefCell::new(
        PixelSurface::from_size(canvas).context("Failed to create pixel surface")?,
    ));

    let frame_loop: Box<dyn FrameLoop> = if realtime {
        Box::new(IntervalLoop::new(fps))
    } else {
        Box::new(ManualLoop::at_fps(fps as f64))
    };

    let mut director = Director::with_config(surface.clone(), file.director.clone())
        .context("Invalid director configuration")?
        .with_frame_loop(frame_loop);

    let last_frame = Rc::new(RefCell::new(None));
    let sink = last_frame.clone();
    director.on_tick(move |tick| *sink.borrow_mut() = Some(*tick));

    let objects = scene::build_scene(&file.scene, canvas);
    info!(
        "Scene: {} objects on a {}x{} canvas",
        objects.len(),
        canvas.width,
        canvas.height
    );
    director.add_objects(objects);
    director.start();

    let frames = director.run(Some(max_frames));

    info!(
        "Ran {} frames ({:.0}ms simulated), state {:?}, {} objects left",
        frames,
        director.elapsed_millis(),
        director.state(),
        director.object_count()
    );
    if let Some(tick) = *last_frame.borrow() {
        info!("Last tick: frame {} at {:.0}ms", tick.frames, tick.total_millis);
    }

    if let Some(path) = output {
        surface
            .borrow()
            .save_png(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
