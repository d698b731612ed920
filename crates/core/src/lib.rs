//! Core rules engine - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and phase logic
//! for Encompass. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: the same input sequence always produces the same game
//! - **Testable**: comprehensive unit tests for all game rules
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 5x5 occupancy grid with adjacency, enclosure-support and shift primitives
//! - [`victory`]: the enclosure scan deciding whether a position is won
//! - [`game`]: the four-phase state machine driving a full match
//! - [`score`]: per-player win tallies surviving board resets
//! - [`snapshot`]: the read-only display projection consumed by a view
//!
//! # Game Rules
//!
//! - **Placement**: the active player drops a bead on any empty cell that is
//!   not enclosed by the opponent, while their supply lasts
//! - **Enclosure victory**: a non-border bead whose four orthogonal
//!   neighbours all belong to the other player ends the game
//! - **Trade**: clicking an occupied cell stages it; clicking an
//!   opposing-owned cell then removes both (turn alternation is suspended
//!   while the trade is pending)
//! - **Clearance**: when the board saturates, six own-bead removals are owed
//!   before regular play resumes
//! - **Shift**: an off-board click compacts the whole board one step toward
//!   an empty edge, at no turn cost
//!
//! # Example
//!
//! ```
//! use tui_encompass_core::Game;
//! use tui_encompass_types::{Coord, Player};
//!
//! let mut game = Game::new();
//! game.place_or_trade(Coord::new(2, 2));
//! assert_eq!(game.board().count_owned(Player::Red), 1);
//! assert_eq!(game.active_player(), Player::Blue);
//! ```

pub mod board;
pub mod game;
pub mod score;
pub mod snapshot;
pub mod victory;

pub use board::Board;
pub use game::{Game, Phase};
pub use score::ScoreKeeper;
pub use snapshot::GameSnapshot;
pub use victory::find_victory;

pub use tui_encompass_types as types;
