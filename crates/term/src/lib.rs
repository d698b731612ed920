//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play. It
//! renders into a simple character framebuffer that can be flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: `GameView` maps a snapshot into a frame, no I/O
//! - Full redraws per input event; at a 5x5 board there is nothing to diff

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_encompass_core as core;
pub use tui_encompass_types as types;

pub use fb::{Frame, Glyph, Tint};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
