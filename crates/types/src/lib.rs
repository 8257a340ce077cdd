//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small conversions, making them
//! usable in any context (core logic, terminal rendering, headless output).
//!
//! # Grid
//!
//! The snake lives on a square toroidal grid:
//!
//! - **Size**: 20 x 20 cells (indexed 0-19 on both axes)
//! - **Wraparound**: leaving one edge re-enters from the opposite edge
//! - **Spawn**: head at (5, 10), body trailing to the left, moving right
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 130 | Interval between snake steps while running |
//! | `SWIPE_THRESHOLD` | 40.0 | Pointer travel before a swipe registers |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameCommand, Point, GRID_SIZE, INITIAL_SNAKE};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(
//!     GameCommand::from_str("up"),
//!     Some(GameCommand::SetDirection(Direction::Up))
//! );
//!
//! assert_eq!(GRID_SIZE, 20);
//! assert_eq!(INITIAL_SNAKE[0], Point::new(5, 10));
//! ```

use serde::{Deserialize, Serialize};

/// Grid width and height in cells.
pub const GRID_SIZE: i32 = 20;

/// Interval between ticks while running, in milliseconds.
pub const TICK_MS: u64 = 130;

/// Pointer distance along one axis before a swipe emits a direction.
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// Snake body at session start (head first).
pub const INITIAL_SNAKE: [Point; 3] = [Point::new(5, 10), Point::new(4, 10), Point::new(3, 10)];

/// Heading at session start.
pub const INITIAL_DIRECTION: Direction = Direction::Right;


/// A cell coordinate on the grid.
///
/// Coordinates produced by the engine are always in `[0, GRID_SIZE)`; the type itself
/// does not enforce that so that tests can build arbitrary layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake.
///
/// Screen coordinates: `y` grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` for one step in this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180° reversal of this direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle of a game.
///
/// - **Idle**: fresh state, nothing moves until started
/// - **Running**: the scheduler is ticking
/// - **Paused**: ticking suspended, state retained
/// - **GameOver**: terminal until reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Status {
    pub fn is_running(&self) -> bool {
        matches!(self, Status::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Paused => "paused",
            Status::GameOver => "game_over",
        }
    }
}

/// Commands accepted by a game session.
///
/// Produced by the key map, the swipe decoder, or any other front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Begin or resume ticking (`Idle | Paused -> Running`)
    Start,
    /// Suspend ticking (`Running -> Paused`)
    Pause,
    /// Start when stopped, pause when running (single start/pause button)
    TogglePause,
    /// Rebuild the initial state after a game over (`GameOver -> Idle`)
    Reset,
    /// Request a new heading; reversals are ignored
    SetDirection(Direction),
    /// Stop the session driver
    Quit,
}

impl GameCommand {
    /// Parse command from string
    ///
    /// Direction names map to [`GameCommand::SetDirection`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameCommand};
    ///
    /// assert_eq!(GameCommand::from_str("start"), Some(GameCommand::Start));
    /// assert_eq!(GameCommand::from_str("togglePause"), Some(GameCommand::TogglePause));
    /// assert_eq!(
    ///     GameCommand::from_str("Down"),
    ///     Some(GameCommand::SetDirection(Direction::Down))
    /// );
    /// assert_eq!(GameCommand::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameCommand::Start),
            "pause" => Some(GameCommand::Pause),
            "togglepause" => Some(GameCommand::TogglePause),
            "reset" => Some(GameCommand::Reset),
            "quit" => Some(GameCommand::Quit),
            other => Direction::from_str(other).map(GameCommand::SetDirection),
        }
    }

    /// Convert to camelCase string (directions use their own names)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::Pause => "pause",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Reset => "reset",
            GameCommand::Quit => "quit",
            GameCommand::SetDirection(dir) => dir.as_str(),
        }
    }
}

/// What a single tick did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Idle,
    /// The snake advanced one cell without growing.
    Moved,
    /// The snake ate the food and grew by one segment.
    Ate,
    /// The next head hit the body; the game is over.
    Collided { at: Point },
    /// The snake ate the last food and covers every cell; the game is over.
    GridFull,
}
