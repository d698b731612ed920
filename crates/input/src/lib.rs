//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into the inputs the rules engine
//! understands: replay/quit intents and pointer targets (a validated grid
//! coordinate or a centre-relative vector). It never produces raw terminal
//! positions past this boundary.

pub mod map;
pub mod pointer;

pub use tui_encompass_types as types;

pub use map::{should_quit, wants_replay};
pub use pointer::pointer_target;
