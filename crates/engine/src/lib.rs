//! Session engine - drives a game in real time
//!
//! This crate wraps the pure [`tui_snake_core::GameState`] in a session that a
//! front end can talk to:
//!
//! - [`session`]: the [`GameSession`] facade (commands in, snapshots out)
//! - [`runtime`]: the tokio driver with a free-running tick scheduler, and a
//!   [`SessionHandle`] for synchronous callers
//! - [`config`]: [`SnakeConfig`] read from `SNAKE_*` environment variables
//!
//! # Example
//!
//! ```
//! use tui_snake_engine::{GameSession, FoodStrategy};
//! use tui_snake_types::{GameCommand, Status};
//!
//! let mut session = GameSession::new(7, FoodStrategy::Rejection);
//! session.apply(GameCommand::Start);
//! session.tick();
//!
//! assert_eq!(session.snapshot().status, Status::Running);
//! assert_eq!(session.snapshot().tick_id, 1);
//! ```

pub mod config;
pub mod runtime;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::{ConfigError, SnakeConfig};
pub use runtime::{run_session, SessionError, SessionHandle};
pub use session::GameSession;
pub use tui_snake_core::FoodStrategy;
