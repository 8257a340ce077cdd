//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders snapshots into a framebuffer that is flushed to the
//! terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Render only from immutable snapshots
//! - Keep grid cells roughly square (2 columns wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
