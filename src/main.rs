//! Brick Breaker headless runner
//!
//! Plays a session with the autopilot and prints the final frame as text.
//!
//! Example:
//!   RUST_LOG=info cargo run -- --columns 6 --rows 3 --seed 7 --levels 2
//!   cargo run -- --layout page.json --scene-json final_scene.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brick_breaker::autopilot::Autopilot;
use brick_breaker::layout::link_grid;
use brick_breaker::renderer::{TextSurface, draw_scene};
use brick_breaker::{ArenaBootstrap, FrameDriver, FrameOutcome, GameEvent};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run a brick breaker session with the autopilot",
    long_about = None
)]
struct Args {
    /// Arena bootstrap JSON (bounds, targets, optional config)
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Arena width when generating a layout
    #[arg(long, default_value_t = 480.0)]
    width: f32,
    /// Arena height when generating a layout
    #[arg(long, default_value_t = 400.0)]
    height: f32,
    #[arg(long, default_value_t = 6)]
    columns: usize,
    #[arg(long, default_value_t = 3)]
    rows: usize,
    /// Seed for the generated layout
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Override the configured level count
    #[arg(long)]
    levels: Option<u32>,
    /// Override the configured starting lives
    #[arg(long)]
    lives: Option<u32>,
    /// Tear the session down after this many frames
    #[arg(long, default_value_t = 50_000)]
    max_frames: u64,
    #[arg(long, default_value_t = 60)]
    grid_cols: usize,
    #[arg(long, default_value_t = 25)]
    grid_rows: usize,
    /// Write the last drawn scene here as JSON
    #[arg(long)]
    scene_json: Option<PathBuf>,
}

fn load_bootstrap(args: &Args) -> Result<ArenaBootstrap> {
    let mut bootstrap = match &args.layout {
        Some(path) => ArenaBootstrap::load_from_file(path)
            .with_context(|| format!("load layout {:?}", path))?,
        None => ArenaBootstrap::new(
            args.width,
            args.height,
            link_grid(args.width, args.columns, args.rows, args.seed),
        ),
    };
    if let Some(levels) = args.levels {
        bootstrap.config.level_count = levels;
    }
    if let Some(lives) = args.lives {
        bootstrap.config.starting_lives = lives;
    }
    Ok(bootstrap)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let bootstrap = load_bootstrap(&args)?;
    let mut driver = FrameDriver::new();
    let controls = driver.start(&bootstrap).context("invalid arena bootstrap")?;

    let sounds = bootstrap.config.sounds.clone();
    let input = controls.input.clone();
    driver.subscribe(move |event| {
        if let Some(asset) = sounds.cue(event) {
            log::debug!("{:?} -> {}", event, asset);
        }
        if let GameEvent::LevelCleared { level } = event {
            log::info!("Advancing past level {}", level);
            input.request_advance_level();
        }
    });

    let pilot = Autopilot::default();
    let mut surface = TextSurface::new(
        args.grid_cols,
        args.grid_rows,
        bootstrap.width,
        bootstrap.height,
    );
    let mut last_scene = None;
    loop {
        if driver.frame_count() >= args.max_frames {
            if controls.teardown.teardown() {
                log::info!("Frame limit {} reached", args.max_frames);
            }
        } else if let Some(session) = driver.session() {
            controls.input.point_at(pilot.aim(session));
        }

        let report = driver.frame(&mut surface);
        if report.scene.is_some() {
            last_scene = report.scene;
        }
        if report.outcome == FrameOutcome::Stop {
            break;
        }
    }

    // Teardown blanks the live surface, so redraw the last scene for display
    if let Some(scene) = &last_scene {
        let mut final_frame =
            TextSurface::new(args.grid_cols, args.grid_rows, bootstrap.width, bootstrap.height);
        draw_scene(scene, &bootstrap.config.palette, &mut final_frame);
        print!("{}", final_frame);
    }

    if let Some(snapshot) = driver.snapshot() {
        println!(
            "frames: {}  score: {}  lives: {}  level: {}/{}  phase: {:?}",
            driver.frame_count(),
            snapshot.score,
            snapshot.lives,
            snapshot.level,
            snapshot.level_count,
            snapshot.phase
        );
    }

    if let (Some(path), Some(scene)) = (&args.scene_json, &last_scene) {
        let json = serde_json::to_string_pretty(scene).context("serialize scene")?;
        fs::write(path, json).with_context(|| format!("write scene {:?}", path))?;
    }

    Ok(())
}
