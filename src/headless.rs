//! Headless mode: run a session without a terminal and print snapshots as JSON lines.
//!
//! Useful for scripted runs and for checking determinism: the same seed, script and
//! tick count always print the same lines.
//!
//! ```text
//! tui-snake --headless 40 --script down,,,left,,up
//! ```
//!
//! Script entry `i` is applied right before tick `i + 1`; empty entries skip a tick.

use std::io::Write;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::engine::{GameSession, SnakeConfig};
use crate::types::{GameCommand, Status};

/// Parsed `--headless` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadlessArgs {
    pub ticks: u32,
    /// Per-tick commands; `None` leaves that tick alone.
    pub script: Vec<Option<GameCommand>>,
}

/// Parse `--headless <ticks> [--script <commands>]` (program name excluded).
///
/// Returns `Ok(None)` when headless mode was not requested.
pub fn parse_headless_args<I, S>(args: I) -> Result<Option<HeadlessArgs>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ticks = None;
    let mut script = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--headless" => {
                let value = args.next().context("--headless requires a tick count")?;
                let value = value.as_ref();
                ticks = Some(
                    value
                        .parse::<u32>()
                        .with_context(|| format!("invalid tick count {value:?}"))?,
                );
            }
            "--script" => {
                let value = args.next().context("--script requires a command list")?;
                script = parse_script(value.as_ref())?;
            }
            other => bail!("unknown argument {other:?}"),
        }
    }

    match ticks {
        Some(ticks) => Ok(Some(HeadlessArgs { ticks, script })),
        None if script.is_empty() => Ok(None),
        None => bail!("--script needs --headless"),
    }
}

/// Parse a comma-separated command list such as `"start,up,,left"`.
pub fn parse_script(text: &str) -> Result<Vec<Option<GameCommand>>> {
    text.split(',')
        .map(str::trim)
        .map(|name| {
            if name.is_empty() {
                return Ok(None);
            }
            GameCommand::from_str(name)
                .map(Some)
                .with_context(|| format!("unknown command {name:?} in script"))
        })
        .collect()
}

/// Start a session and advance it `args.ticks` times, writing the initial snapshot and
/// one snapshot per tick. Stops early on game over or a scripted `quit`.
///
/// Returns the final session.
pub fn run_headless<W: Write>(
    config: &SnakeConfig,
    args: &HeadlessArgs,
    mut out: W,
) -> Result<GameSession> {
    let mut session = GameSession::from_config(config);
    session.apply(GameCommand::Start);
    write_line(&mut out, &session)?;

    let mut script = args.script.iter().copied();
    for _ in 0..args.ticks {
        match script.next().flatten() {
            Some(GameCommand::Quit) => break,
            Some(command) => {
                session.apply(command);
            }
            None => {}
        }
        session.tick();
        write_line(&mut out, &session)?;
        if session.status() == Status::GameOver {
            break;
        }
    }
    out.flush()?;

    let state = session.state();
    info!(
        seed = state.seed(),
        strategy = state.strategy().as_str(),
        ticks = state.tick_id(),
        score = state.score(),
        status = state.status().as_str(),
        "headless run finished"
    );
    Ok(session)
}

fn write_line<W: Write>(out: &mut W, session: &GameSession) -> Result<()> {
    serde_json::to_writer(&mut *out, session.snapshot())?;
    out.write_all(b"\n")?;
    Ok(())
}
