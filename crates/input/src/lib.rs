//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond crossterm's event types.
//! It maps key events into [`crate::types::GameCommand`] and decodes mouse drags
//! into direction requests with a swipe threshold.

pub mod map;
pub mod swipe;

pub use tui_snake_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
pub use swipe::{dominant_direction, SwipeDecoder};
