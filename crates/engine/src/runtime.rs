//! Session runtime.
//!
//! Runs a [`GameSession`] on a tokio task and bridges it with a synchronous
//! front end. Commands flow in over a bounded mpsc channel; snapshots flow out over a
//! watch channel, so readers only ever see complete, immutable copies.
//!
//! The tick source is a free-running [`tokio::time::Interval`] that exists only while
//! the game is running. It is created when the status enters `Running` and dropped the
//! moment it leaves, so a stop request cannot be followed by a stray tick. Direction
//! commands never touch the interval, so input cannot push the next tick back.

use std::future;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::SnakeConfig;
use crate::core::GameSnapshot;
use crate::session::GameSession;
use crate::types::{GameCommand, Status};

/// Errors raised by the session runtime.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to build tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("command queue is full")]
    QueueFull,

    #[error("session has stopped")]
    Closed,
}

/// Drive `session` until the command channel closes or `Quit` arrives.
///
/// Publishes a snapshot after every state change. Returns the session so callers
/// can inspect the final state.
pub async fn run_session(
    mut session: GameSession,
    mut commands: mpsc::Receiver<GameCommand>,
    snapshots: watch::Sender<GameSnapshot>,
    period: Duration,
) -> GameSession {
    let mut ticker: Option<Interval> = None;
    snapshots.send_replace(session.snapshot().clone());

    loop {
        sync_ticker(&mut ticker, session.status(), period);

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("command channel closed");
                    break;
                };
                if command == GameCommand::Quit {
                    break;
                }
                if session.apply(command) {
                    snapshots.send_replace(session.snapshot().clone());
                }
            }
            _ = next_tick(&mut ticker) => {
                session.tick();
                snapshots.send_replace(session.snapshot().clone());
            }
        }
    }

    info!(
        score = session.state().score(),
        status = session.status().as_str(),
        "session stopped"
    );
    session
}

/// Keep the interval alive exactly while the game is running.
fn sync_ticker(ticker: &mut Option<Interval>, status: Status, period: Duration) {
    match (status.is_running(), ticker.is_some()) {
        (true, false) => {
            // First tick lands one full period after (re)starting.
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            *ticker = Some(interval);
        }
        (false, true) => *ticker = None,
        _ => {}
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => future::pending::<()>().await,
    }
}

/// A session running on its own tokio runtime.
///
/// Owned by a synchronous game loop: commands are queued without blocking and the
/// latest snapshot can be polled every frame.
pub struct SessionHandle {
    rt: Runtime,
    commands: mpsc::Sender<GameCommand>,
    snapshots: watch::Receiver<GameSnapshot>,
    task: JoinHandle<GameSession>,
}

impl SessionHandle {
    /// Start a session from configuration.
    pub fn spawn(config: &SnakeConfig) -> Result<Self, SessionError> {
        Self::spawn_session(GameSession::from_config(config), config)
    }

    /// Start an existing session with the cadence and buffer from `config`.
    pub fn spawn_session(session: GameSession, config: &SnakeConfig) -> Result<Self, SessionError> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("snake-session")
            .enable_time()
            .build()?;

        let (cmd_tx, cmd_rx) = mpsc::channel(config.command_buffer.max(1));
        let (snap_tx, snap_rx) = watch::channel(session.snapshot().clone());
        let task = rt.spawn(run_session(session, cmd_rx, snap_tx, config.tick_interval()));

        Ok(Self {
            rt,
            commands: cmd_tx,
            snapshots: snap_rx,
            task,
        })
    }

    /// Queue a command without blocking.
    pub fn send(&self, command: GameCommand) -> Result<(), SessionError> {
        self.commands.try_send(command).map_err(|err| match err {
            mpsc::error::TrySendError::Full(cmd) => {
                warn!(command = cmd.as_str(), "command dropped, queue full");
                SessionError::QueueFull
            }
            mpsc::error::TrySendError::Closed(_) => SessionError::Closed,
        })
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshots.borrow().clone()
    }

    /// The latest snapshot if it changed since the last call.
    pub fn poll_snapshot(&mut self) -> Option<GameSnapshot> {
        match self.snapshots.has_changed() {
            Ok(true) => Some(self.snapshots.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Stop the session and wait for its task, returning the final snapshot.
    pub fn shutdown(self) -> GameSnapshot {
        let Self {
            rt,
            commands,
            snapshots,
            task,
        } = self;

        // Closing the channel ends the loop even when the queue is full.
        drop(commands);
        let final_snapshot = match rt.block_on(task) {
            Ok(session) => session.snapshot().clone(),
            Err(err) => {
                warn!(%err, "session task failed");
                snapshots.borrow().clone()
            }
        };
        rt.shutdown_timeout(Duration::from_millis(100));
        final_snapshot
    }
}
