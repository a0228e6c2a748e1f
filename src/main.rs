//! Terminal raycaster runner (default binary).
//!
//! Each frame: measure elapsed time, sample at most one command, update the
//! viewpoint, cast every column in parallel, compose the overlays and flush the
//! result to the terminal. Runs until a quit key is pressed.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use tui_raycaster::core::{Frame, FrameCompositor, FrameStats, RenderConfig, Viewpoint, WorldMap};
use tui_raycaster::input::{sample, wait_for_input, FrameInput};
use tui_raycaster::logging;
use tui_raycaster::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tui_raycaster::types::MAX_FRAME_DT_MS;

fn main() -> Result<()> {
    let config = RenderConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    let map = load_map(&config)?;
    info!(
        screen_width = config.screen_width,
        screen_height = config.screen_height,
        fov = config.fov,
        max_depth = config.max_depth,
        map_width = map.width(),
        map_height = map.height(),
        "starting renderer"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &map);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(error = %err, "render loop failed");
    }
    result
}

fn init_logging(path: Option<&str>) -> Result<()> {
    // stdout belongs to the alternate screen; without a file, stay silent.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {path}"))?;
    tracing::subscriber::set_global_default(logging::subscriber(Mutex::new(file)))
        .context("install log subscriber")?;
    Ok(())
}

fn load_map(config: &RenderConfig) -> Result<WorldMap> {
    match &config.map_path {
        Some(path) => {
            let map = WorldMap::load(path).with_context(|| format!("load map {path}"))?;
            info!(%path, "using custom map");
            Ok(map)
        }
        None => Ok(WorldMap::default_map()),
    }
}

fn run(term: &mut TerminalRenderer, config: &RenderConfig, map: &WorldMap) -> Result<()> {
    let mut view = Viewpoint::default();
    let (cx, cy) = view.cell();
    if map.is_solid(cx, cy) {
        warn!(x = view.x, y = view.y, "spawn point is inside a wall");
    }

    let scene = SceneView::new(map.width(), map.height());
    let mut compositor = FrameCompositor::new();
    let mut frame = Frame::new(
        usize::from(config.screen_width),
        usize::from(config.screen_height),
    );
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    let frame_budget = Duration::from_millis(config.frame_ms);
    let max_dt = Duration::from_millis(MAX_FRAME_DT_MS);

    let mut last_tick = Instant::now();
    let mut frame_counter: u32 = 0;
    let mut bytes_written: usize = 0;
    let mut last_fps_log = Instant::now();

    loop {
        // Cap dt so a stall does not turn into one huge step through walls.
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_tick).min(max_dt);
        last_tick = frame_start;
        let elapsed = dt.as_secs_f64();

        match sample(Duration::ZERO)? {
            FrameInput::Quit => {
                info!("quit requested");
                return Ok(());
            }
            FrameInput::Resized(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
                debug!(width = w, height = h, "terminal resized");
            }
            FrameInput::Command(command) => {
                view.apply(command, elapsed, config, map);
            }
            FrameInput::Idle => {}
        }

        compositor.compose(&mut frame, map, &view, config, FrameStats::new(elapsed));
        scene.render_into(&frame, viewport, &mut fb);
        let stats = term.present_swap(&mut fb)?;

        frame_counter += 1;
        bytes_written += stats.bytes;
        let since = last_fps_log.elapsed().as_secs_f64();
        if since >= 1.0 {
            debug!(
                fps = f64::from(frame_counter) / since,
                bytes_per_frame = bytes_written / frame_counter as usize,
                x = view.x,
                y = view.y,
                heading = view.heading,
                "frame stats"
            );
            frame_counter = 0;
            bytes_written = 0;
            last_fps_log = Instant::now();
        }

        // Idle out the rest of the budget; pending input ends the wait early.
        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            wait_for_input(rest)?;
        }
    }
}
