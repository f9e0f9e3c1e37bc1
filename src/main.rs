//! Headless paint demo: scripted tracking on a worker thread, scene updates on
//! the main (render) thread.
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --frames <N>      Tracking frames to simulate (default: 600)
//!   --config <PATH>   Placement config JSON (default: built-in defaults)
//!   --shape <NAME>    Brush shape: box, capsule, cone, cylinder, pyramid,
//!                     sphere, torus, tube (default: sphere)
//!   --size <S>        Brush size factor (default: 0.5)
//!   --spin            Spin painted brushes

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use ar_paint::brush::{BrushSettings, BrushShape, PaintTrigger, SharedBrushSettings};
use ar_paint::core::logging;
use ar_paint::core::Result;
use ar_paint::paint::{self, PaintPlacementController, PaintSession, PlacementConfig};
use ar_paint::scene::{CURSOR_TAG, NodeRole, SceneGraph};
use ar_paint::tracking::ScriptedTracking;

/// Render ticks per second in the demo
const TICK_RATE: f32 = 60.0;
/// Frames the scripted tracker reports no pose before converging
const WARMUP_FRAMES: u32 = 30;
/// Trigger held for this many frames out of every 120
const PAINT_FRAMES_PER_CYCLE: u64 = 40;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let frames = parse_u64_arg(&args, "--frames").unwrap_or(600);
    let size = parse_f32_arg(&args, "--size").unwrap_or(0.5);
    let spinning = args.iter().any(|a| a == "--spin");
    let shape = match parse_str_arg(&args, "--shape") {
        Some(name) => name.parse::<BrushShape>()?,
        None => BrushShape::Sphere,
    };
    let config = match parse_str_arg(&args, "--config") {
        Some(path) => PlacementConfig::load(&PathBuf::from(path))?,
        None => PlacementConfig::default(),
    };

    println!("=== AR Paint Demo ===");
    println!("Frames: {}", frames);
    println!("Brush:  {} (size {}, spin {})", shape, size, spinning);
    println!();

    let settings = SharedBrushSettings::new(
        BrushSettings::default()
            .with_shape(shape)
            .with_size_factor(size)
            .with_spinning(spinning),
    );
    let trigger = PaintTrigger::new();
    let (sender, mut receiver) = paint::channel();

    let tracking_thread = {
        let mut session = PaintSession::new(
            ScriptedTracking::orbit(1.5, 0.2, 240, WARMUP_FRAMES),
            settings.clone(),
            trigger.clone(),
            PaintPlacementController::new(config),
            sender,
        );
        thread::spawn(move || -> Result<_> {
            for frame in 0..frames {
                // Stand-in for the user pressing and releasing the trigger
                session.trigger().set(frame % 120 < PAINT_FRAMES_PER_CYCLE);
                session.tick()?;
            }
            Ok(session.stats())
        })
    };

    let mut scene = SceneGraph::new();
    let mut max_cursors = 0;
    while receiver.apply_next_blocking(&mut scene).is_some() {
        receiver.apply_pending(&mut scene);
        max_cursors = max_cursors.max(scene.tagged_count(CURSOR_TAG));
        scene.advance(1.0 / TICK_RATE);
    }

    let stats = match tracking_thread.join() {
        Ok(result) => result?,
        Err(_) => {
            log::error!("Tracking thread panicked");
            return Ok(());
        }
    };

    let draw_list = scene.draw_list();
    println!("Tracking frames: {} ({} skipped)", stats.frames, stats.skipped);
    println!("Painted nodes:   {}", scene.count_role(NodeRole::Painted));
    println!("Cursor nodes:    {} (max seen {})", scene.tagged_count(CURSOR_TAG), max_cursors);
    println!("Draw items:      {}", draw_list.len());
    println!("Scene time:      {:.2}s", scene.time());
    Ok(())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    parse_str_arg(args, flag).and_then(|s| s.parse().ok())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    parse_str_arg(args, flag).and_then(|s| s.parse().ok())
}
