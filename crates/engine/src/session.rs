//! Game session facade.
//!
//! Owns the authoritative [`GameState`], applies commands, advances ticks and
//! publishes immutable snapshots. Nothing outside the session holds a reference
//! into the live state.

use tracing::{debug, info};

use crate::config::SnakeConfig;
use crate::core::{FoodStrategy, GameSnapshot, GameState};
use crate::types::{GameCommand, Status, TickOutcome};

pub struct GameSession {
    state: GameState,
    /// Reused between publications.
    snapshot: GameSnapshot,
}

impl GameSession {
    pub fn new(seed: u64, strategy: FoodStrategy) -> Self {
        Self::from_state(GameState::with_strategy(seed, strategy))
    }

    /// Build a session from configuration, drawing a seed when none is set.
    pub fn from_config(config: &SnakeConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, strategy = config.food_strategy.as_str(), "new session");
        Self::new(seed, config.food_strategy)
    }

    pub fn from_state(state: GameState) -> Self {
        let snapshot = state.snapshot();
        Self { state, snapshot }
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply a command. Returns whether the visible state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        let before = self.state.status();
        let changed = self.state.apply_command(command);
        let after = self.state.status();

        if before != after {
            info!(
                from = before.as_str(),
                to = after.as_str(),
                command = command.as_str(),
                "status changed"
            );
        } else if !changed {
            debug!(command = command.as_str(), status = after.as_str(), "command ignored");
        }

        if changed {
            self.state.snapshot_into(&mut self.snapshot);
        }
        changed
    }

    /// Advance one tick and refresh the published snapshot.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.state.tick();
        match outcome {
            TickOutcome::Idle => return outcome,
            TickOutcome::Moved => {}
            TickOutcome::Ate => {
                debug!(score = self.state.score(), len = self.state.len(), "food eaten");
            }
            TickOutcome::Collided { at } => {
                info!(
                    x = at.x,
                    y = at.y,
                    score = self.state.score(),
                    ticks = self.state.tick_id(),
                    "game over"
                );
            }
            TickOutcome::GridFull => {
                info!(
                    score = self.state.score(),
                    ticks = self.state.tick_id(),
                    "game over, grid full"
                );
            }
        }
        self.state.snapshot_into(&mut self.snapshot);
        outcome
    }

    /// The latest snapshot, as of the last command or tick.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }
}
