//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, state management, and simulation logic.
//! It has **no dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is a plain method call
//! - **Portable**: Runs in the terminal driver, headless, or under a test clock
//!
//! # Module Structure
//!
//! - [`grid`]: Toroidal coordinate arithmetic on the 20x20 grid
//! - [`gate`]: Direction gate that rejects 180° reversals
//! - [`food`]: Random food placement on unoccupied cells
//! - [`game_state`]: Snake body, score, lifecycle and the tick engine
//! - [`snapshot`]: Immutable copies of the state for renderers
//!
//! # Game Rules
//!
//! - **Wraparound**: The grid is a torus; there are no walls
//! - **Self-collision**: Moving into any current body cell ends the game, including
//!   the tail cell that would be vacated on the same tick
//! - **Growth**: Eating food adds one segment and one point
//! - **No reversal**: Requests for the opposite heading are silently dropped
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameCommand, Status, TickOutcome};
//!
//! let mut game = GameState::new(12345);
//! game.apply_command(GameCommand::Start);
//! game.apply_command(GameCommand::SetDirection(Direction::Down));
//!
//! let outcome = game.tick();
//! assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Ate));
//! assert_eq!(game.status(), Status::Running);
//! assert_eq!(game.direction(), Direction::Down);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. A driver calls [`GameState::tick`] every `TICK_MS`
//! (130ms) while the status is `Running`.

pub mod food;
pub mod game_state;
pub mod gate;
pub mod grid;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::{place_food, place_food_in_free_cells, FoodStrategy};
pub use game_state::GameState;
pub use gate::gate;
pub use grid::step;
pub use snapshot::GameSnapshot;
