//! Game module - the four-phase state machine
//!
//! This module ties together the board, the enclosure scan and the score
//! tally. It owns the board exclusively; the outside world interacts through
//! three inputs (`place_or_trade`, `outside_shift`, `replay`) and reads back
//! a [`GameSnapshot`].
//!
//! Turn alternation is driven by [`Game::process_new_state`], which runs
//! after every rule-mutating action: one toggle per completed ply. Staging a
//! bead for a trade suspends alternation until the trade completes or is
//! cancelled.

use tracing::{debug, info};

use crate::board::Board;
use crate::score::ScoreKeeper;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Coord, Player, ShiftDirection, CLEARANCE_REMOVALS, FIRST_PLAYER, STARTING_BEADS,
};
use crate::victory::find_victory;

/// Current phase, with phase-specific payload. The payload placement makes
/// illegal combinations (a staged trade during clearance, say)
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Alternating placement
    Regular,
    /// A trade is pending; `staged` awaits an opposing partner
    Removal { staged: Coord },
    /// The board saturated; `remaining` own-bead removals are owed
    Clearance { remaining: u8 },
    /// Terminal until replay; `victory` is the cell that ended the game
    Finished { victory: Coord },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    scores: ScoreKeeper,
    active: Player,
    phase: Phase,
}

impl Game {
    /// Create a new game. The first mover is [`FIRST_PLAYER`].
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            scores: ScoreKeeper::new(),
            active: FIRST_PLAYER,
            phase: Phase::Regular,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.scores.wins(player)
    }

    /// Beads the player still has in hand. Derived, never stored.
    pub fn beads_remaining(&self, player: Player) -> u8 {
        STARTING_BEADS - self.board.count_owned(player)
    }

    /// Handle a click on the grid: a placement, a trade pick, a clearance
    /// removal or a staging action, depending on phase. Illegal clicks are
    /// silent no-ops.
    pub fn place_or_trade(&mut self, coord: Coord) {
        match self.phase {
            Phase::Finished { .. } => {}
            Phase::Clearance { remaining } => self.run_clearance(coord, remaining),
            Phase::Removal { staged } => self.run_removal(coord, staged),
            Phase::Regular => {
                if self.board.is_empty(coord) {
                    self.try_place(coord);
                } else {
                    // Any occupied cell, own or enemy, can open a trade.
                    info!(player = %self.active, cell = %coord, "entering removal");
                    self.board.highlight(coord);
                    self.phase = Phase::Removal { staged: coord };
                    self.process_new_state();
                }
            }
        }
    }

    fn try_place(&mut self, coord: Coord) {
        let legal = !self.board.is_enclosed_by(coord, self.active.opponent())
            && self.beads_remaining(self.active) > 0;
        if legal {
            debug!(player = %self.active, cell = %coord, "placing bead");
            self.board.set(coord, Some(self.active));
            self.process_new_state();
        }
    }

    fn run_removal(&mut self, coord: Coord, staged: Coord) {
        if coord == staged {
            // Clicking the staged bead again cancels at no turn cost.
            info!("leaving removal");
            self.board.clear_highlight();
            self.phase = Phase::Regular;
        } else if self.board.opposed_pair(coord, staged) {
            info!(first = %staged, second = %coord, "trade complete");
            self.board.set(coord, None);
            self.board.set(staged, None);
            self.board.clear_highlight();
            self.phase = Phase::Regular;
            self.process_new_state();
        }
    }

    fn run_clearance(&mut self, coord: Coord, remaining: u8) {
        // Only the active player's own beads come off during clearance.
        if self.board.owner(coord) == Some(self.active) {
            self.board.set(coord, None);
            assert!(remaining > 0, "clearance counter underflow");
            self.phase = Phase::Clearance {
                remaining: remaining - 1,
            };
            self.process_new_state();
        }
    }

    /// Handle a click outside the grid: a free board compaction toward the
    /// dominant axis of the centre-relative vector. Accepted only during
    /// regular play; costs no turn.
    pub fn outside_shift(&mut self, dx: i32, dy: i32) {
        if self.phase != Phase::Regular {
            return;
        }
        let Some(direction) = ShiftDirection::from_vector(dx, dy) else {
            return;
        };
        if self.board.can_shift(direction) {
            info!(?direction, "shifting board");
            self.board.shift(direction);
        }
    }

    /// Start the next game. Valid only once finished; scores persist.
    pub fn replay(&mut self) {
        if let Phase::Finished { .. } = self.phase {
            info!("resetting game state");
            self.board.clear();
            self.phase = Phase::Regular;
            self.active = FIRST_PLAYER;
        }
    }

    /// Re-evaluate the position after a rule-mutating action: victory first,
    /// then saturation in and out of clearance, then turn alternation.
    fn process_new_state(&mut self) {
        if let Some(victory) = find_victory(&self.board) {
            info!(winner = %self.active, cell = %victory, "game won");
            self.scores.record_win(self.active);
            self.phase = Phase::Finished { victory };
            return;
        }

        if self.board.is_saturated() && !matches!(self.phase, Phase::Clearance { .. }) {
            info!("entering clearance");
            self.phase = Phase::Clearance {
                remaining: CLEARANCE_REMOVALS,
            };
        } else if self.phase == (Phase::Clearance { remaining: 0 }) {
            info!("leaving clearance");
            self.phase = Phase::Regular;
        }

        // One toggle per completed ply; a pending trade suspends alternation.
        if !matches!(self.phase, Phase::Removal { .. }) {
            self.active = self.active.opponent();
        }
    }

    /// Fill an existing snapshot from the current state. Pure with respect
    /// to the game; the view reads only this.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cells = *self.board.cells();
        out.highlight = self.board.highlighted();
        out.victory = match self.phase {
            Phase::Finished { victory } => Some(victory),
            _ => None,
        };
        out.beads_remaining = [
            self.beads_remaining(Player::Red),
            self.beads_remaining(Player::Blue),
        ];
        out.scores = [self.scores.wins(Player::Red), self.scores.wins(Player::Blue)];

        match self.phase {
            Phase::Finished { .. } => {
                out.top_text = format!("{} Wins!", self.active);
                out.bottom_text = Some("Press Space to replay!".to_string());
            }
            Phase::Clearance { remaining } => {
                out.top_text = format!("Active Player: {}", self.active);
                out.bottom_text = Some(format!("Clearance! Removals remaining: {remaining}"));
            }
            _ => {
                out.top_text = format!("Active Player: {}", self.active);
                out.bottom_text = None;
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
