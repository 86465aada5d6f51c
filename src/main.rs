use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use face_scatter::pointer::{PointerEvent, PointerHandler};
use face_scatter::{
    FaceScatterAnimator, FrameLoop, Pixels, ReleaseMode, Result, ScatterConfig, Seconds, SeededRandom,
    TextMesh,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the per-face random draws
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with animation, timeline and scrubber settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Glyph cells across the demo title
    #[arg(long, default_value_t = 12)]
    columns: usize,

    /// Glyph cells down the demo title
    #[arg(long, default_value_t = 2)]
    rows: usize,

    #[arg(long, default_value_t = 600)]
    frames: u64,

    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Drag this many pixels across the title halfway through the run
    #[arg(long)]
    drag: Option<f64>,

    /// What to do when the drag lets go
    #[arg(long, value_enum)]
    release: Option<ReleaseMode>,

    /// Directory to write captured frames to
    #[arg(long)]
    export: Option<PathBuf>,
}

/// A block title of `columns` x `rows` cells, two faces per cell, sized like
/// 40pt type.
fn block_title(columns: usize, rows: usize) -> TextMesh {
    const CELL: f32 = 40.0;
    const BEVEL: f32 = 0.5;
    let triangles = (0..columns).flat_map(|column| {
        (0..rows).flat_map(move |row| {
            let x = column as f32 * CELL;
            let y = row as f32 * CELL;
            [
                [
                    Vec3::new(x, y, 0.0),
                    Vec3::new(x + CELL, y, 0.0),
                    Vec3::new(x + CELL, y + CELL, BEVEL),
                ],
                [
                    Vec3::new(x, y, 0.0),
                    Vec3::new(x + CELL, y + CELL, BEVEL),
                    Vec3::new(x, y + CELL, 0.0),
                ],
            ]
        })
    });
    TextMesh::from_faces(triangles)
}

fn main() {
    run();
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
    }
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();
    if let Err(error) = animate(args) {
        log::error!("{error}");
        std::process::exit(1);
    }
}

fn animate(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ScatterConfig::from_path(path)?,
        None => ScatterConfig::default(),
    };
    if let Some(release) = args.release {
        config.scrubber.release = release;
    }
    let mut random = match args.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_time(),
    };
    log::info!("Seed {}", random.seed());

    let mesh = block_title(args.columns, args.rows).anchored(config.anchor);
    let animator = FaceScatterAnimator::attach(&mesh, &config, &mut random)?;
    let mut pointer = PointerHandler::new();
    let subscription = pointer.subscribe(animator.controller());
    let mut frame_loop = FrameLoop::new(animator);

    #[cfg(not(target_arch = "wasm32"))]
    let mut exporter = args.export.as_ref().map(face_scatter::export::ScatterExporter::new);

    let dt = Seconds(1.0 / args.fps.max(1.0));
    let fps = args.fps.max(1.0) as u64;
    let drag_at = args.frames / 2;
    for frame in 0..args.frames {
        if let Some(distance) = args.drag {
            drag_step(&mut pointer, frame, drag_at, distance);
        }
        frame_loop.tick(dt);
        let animator = frame_loop.animator();
        if frame % fps == 0 {
            let scatter = animator
                .positions()
                .iter()
                .map(|position| position.length())
                .fold(0.0_f32, f32::max);
            log::info!(
                "{:>5.1}s {:<9} progress {:.3} time {:.3} reach {:.1}",
                *frame_loop.elapsed(),
                animator.state().to_string(),
                animator.progress(),
                *animator.time(),
                scatter
            );
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(exporter) = exporter.as_mut() {
            exporter.capture(frame, animator);
        }
    }
    drop(subscription);

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(mut exporter) = exporter {
        let path = exporter.save(frame_loop.animator())?;
        log::info!("Exported to {}", path.display());
    }
    Ok(())
}

/// Grab at `start`, drag across over one second of frames, then let go.
fn drag_step(pointer: &mut PointerHandler, frame: u64, start: u64, distance: f64) {
    const DRAG_FRAMES: u64 = 60;
    const ORIGIN: f64 = 400.0;
    if frame == start {
        pointer.process(&PointerEvent::MouseMoved { x: Pixels(ORIGIN) });
        pointer.process(&PointerEvent::MousePressed);
    } else if frame > start && frame <= start + DRAG_FRAMES {
        let fraction = (frame - start) as f64 / DRAG_FRAMES as f64;
        pointer.process(&PointerEvent::MouseMoved {
            x: Pixels(ORIGIN + distance * fraction),
        });
        if frame == start + DRAG_FRAMES {
            pointer.process(&PointerEvent::MouseReleased);
        }
    }
}
