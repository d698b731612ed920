//! Encompass (workspace facade crate).
//!
//! This package keeps a single `tui_encompass::{core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_encompass_core as core;
pub use tui_encompass_input as input;
pub use tui_encompass_term as term;
pub use tui_encompass_types as types;
