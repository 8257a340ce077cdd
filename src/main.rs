//! Terminal snake runner (default binary).
//!
//! The game session runs on its own tokio runtime; this loop only polls crossterm
//! for input, forwards commands, and redraws when a new snapshot is published.
//! `--headless <ticks> [--script <commands>]` skips the terminal and prints snapshots
//! as JSON lines.

use std::env;
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_snake::engine::{SessionError, SessionHandle, SnakeConfig};
use tui_snake::headless::{parse_headless_args, run_headless};
use tui_snake::input::{handle_key_event, handle_mouse_event, should_quit, SwipeDecoder};
use tui_snake::logging::{setup_logging, LogTarget};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::GameCommand;

/// Input poll timeout; bounds how stale a frame can get.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let config = SnakeConfig::from_env().context("invalid configuration")?;

    if let Some(args) = parse_headless_args(env::args().skip(1))? {
        let _guard = setup_logging(LogTarget::Stderr)?;
        run_headless(&config, &args, io::stdout().lock())?;
        return Ok(());
    }

    let _guard = match config.log_file.as_deref() {
        Some(path) => setup_logging(LogTarget::File(path))?,
        None => setup_logging(LogTarget::Off)?,
    };

    let mut handle = SessionHandle::spawn(&config)?;

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .and_then(|()| run(&mut term, &mut handle, &config));

    // Always try to restore terminal state.
    let _ = term.exit();

    let last = handle.shutdown();
    info!(score = last.score, ticks = last.tick_id, "exited");
    result
}

fn run(
    term: &mut TerminalRenderer,
    handle: &mut SessionHandle,
    config: &SnakeConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut swipe = SwipeDecoder::new(config.swipe_threshold);
    let mut snap = handle.snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if let Some(next) = handle.poll_snapshot() {
            snap = next;
            dirty = true;
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(FRAME)? {
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => handle_mouse_event(&mut swipe, mouse),
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
                None
            }
            _ => None,
        };

        if let Some(command) = command {
            send(handle, command)?;
        }
    }
}

fn send(handle: &SessionHandle, command: GameCommand) -> Result<()> {
    match handle.send(command) {
        Ok(()) => Ok(()),
        // Already logged; dropping one input is harmless.
        Err(SessionError::QueueFull) => Ok(()),
        Err(err) => {
            warn!(%err, command = command.as_str(), "session unavailable");
            Err(err.into())
        }
    }
}
