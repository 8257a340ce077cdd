use serde::{Deserialize, Serialize};

use crate::types::{Direction, Point, Status, INITIAL_DIRECTION};

/// Read-only copy of a game, handed to renderers and observers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Segments, head first.
    pub snake: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub status: Status,
    pub direction: Direction,
    pub episode_id: u32,
    pub tick_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            food: Point::default(),
            score: 0,
            status: Status::Idle,
            direction: INITIAL_DIRECTION,
            episode_id: 0,
            tick_id: 0,
            seed: 0,
        }
    }
}
