//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It draws with the same [`BoardLayout`] the
//! input side hit-tests with, so glyphs and clicks always agree.

use crate::core::GameSnapshot;
use crate::fb::{Frame, Tint};
use crate::types::{BoardLayout, Coord, Player, BOARD_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyph for a settled bead
const BEAD: char = '●';
/// Glyph for the bead staged for removal (drawn hollow)
const STAGED_BEAD: char = '○';
/// Marker overdrawn on the cell that ended the game
const VICTORY_MARK: char = '✚';

/// A lightweight terminal view for the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot into an existing frame, resizing it to the
    /// viewport. Callers can reuse one frame across events.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        layout: &BoardLayout,
        viewport: Viewport,
        fb: &mut Frame,
    ) {
        fb.clear(viewport.width, viewport.height);

        self.draw_grid(layout, fb);
        self.draw_beads(snap, layout, fb);
        self.draw_texts(snap, layout, fb);
    }

    /// Convenience wrapper allocating a fresh frame
    pub fn render(&self, snap: &GameSnapshot, layout: &BoardLayout, viewport: Viewport) -> Frame {
        let mut fb = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, layout, viewport, &mut fb);
        fb
    }

    /// Interior grid lines only; the board has no outer edges.
    fn draw_grid(&self, layout: &BoardLayout, fb: &mut Frame) {
        let (w, h) = (layout.width(), layout.height());
        for i in 1..u16::from(BOARD_SIZE) {
            let col = layout.origin_x + i * layout.cell_w;
            for row in layout.origin_y..layout.origin_y + h {
                fb.set(col, row, '│', Tint::Grey);
            }
        }
        for i in 1..u16::from(BOARD_SIZE) {
            let row = layout.origin_y + i * layout.cell_h;
            for col in layout.origin_x..layout.origin_x + w {
                let ch = match fb.get(col, row) {
                    Some(g) if g.ch == '│' => '┼',
                    _ => '─',
                };
                fb.set(col, row, ch, Tint::Grey);
            }
        }
    }

    fn draw_beads(&self, snap: &GameSnapshot, layout: &BoardLayout, fb: &mut Frame) {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let coord = Coord::new(x, y);
                let Some(owner) = snap.cells[coord.index()] else {
                    continue;
                };
                let tint = match owner {
                    Player::Red => Tint::Red,
                    Player::Blue => Tint::Blue,
                };
                let ch = if snap.highlight == Some(coord) {
                    STAGED_BEAD
                } else {
                    BEAD
                };
                let (cx, cy) = layout.cell_centre(coord);
                fb.set(cx, cy, ch, tint);
            }
        }

        if let Some(victory) = snap.victory {
            let (cx, cy) = layout.cell_centre(victory);
            fb.set(cx, cy, VICTORY_MARK, Tint::Emphasis);
        }
    }

    fn draw_texts(&self, snap: &GameSnapshot, layout: &BoardLayout, fb: &mut Frame) {
        let banner_row = layout.origin_y.saturating_sub(3);
        let status_row = layout.origin_y.saturating_sub(2);
        let prompt_row = layout.origin_y + layout.height() + 1;

        self.print_centred(fb, banner_row, &snap.top_text, Tint::Emphasis);

        let red = format!(
            "Red {} ({} wins)",
            snap.beads_remaining[Player::Red.index()],
            snap.scores[Player::Red.index()]
        );
        let blue = format!(
            "Blue {} ({} wins)",
            snap.beads_remaining[Player::Blue.index()],
            snap.scores[Player::Blue.index()]
        );
        // Badges sit at the outer twelfths of the frame, clear of the board.
        let twelfth = fb.width() / 12;
        fb.print_str(twelfth, status_row, &red, Tint::Red);
        let blue_col = (fb.width() - twelfth).saturating_sub(blue.chars().count() as u16);
        fb.print_str(blue_col, status_row, &blue, Tint::Blue);

        if let Some(prompt) = &snap.bottom_text {
            self.print_centred(fb, prompt_row, prompt, Tint::Plain);
        }
    }

    fn print_centred(&self, fb: &mut Frame, row: u16, text: &str, tint: Tint) {
        let len = text.chars().count() as u16;
        let col = fb.width().saturating_sub(len) / 2;
        fb.print_str(col, row, text, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use crate::types::Coord;

    fn layout() -> BoardLayout {
        BoardLayout {
            origin_x: 10,
            origin_y: 5,
            cell_w: 6,
            cell_h: 3,
        }
    }

    fn render(game: &Game) -> Frame {
        GameView.render(&game.snapshot(), &layout(), Viewport::new(60, 24))
    }

    #[test]
    fn test_bead_drawn_at_cell_centre() {
        let mut game = Game::new();
        game.place_or_trade(Coord::new(2, 2));

        let fb = render(&game);
        let (cx, cy) = layout().cell_centre(Coord::new(2, 2));
        let glyph = fb.get(cx, cy).unwrap();
        assert_eq!(glyph.ch, BEAD);
        assert_eq!(glyph.tint, Tint::Red);
    }

    #[test]
    fn test_staged_bead_drawn_hollow() {
        let mut game = Game::new();
        game.place_or_trade(Coord::new(1, 1));
        game.place_or_trade(Coord::new(1, 1)); // stage

        let fb = render(&game);
        let (cx, cy) = layout().cell_centre(Coord::new(1, 1));
        assert_eq!(fb.get(cx, cy).unwrap().ch, STAGED_BEAD);
    }

    #[test]
    fn test_banner_text_present() {
        let game = Game::new();
        let fb = render(&game);
        let banner = fb.row_text(2);
        assert!(banner.contains("Active Player: Red"), "got: {banner:?}");
    }

    #[test]
    fn test_victory_mark_overdraws_cell() {
        // Red encloses Blue's centre bead through real play.
        let mut g = Game::new();
        g.place_or_trade(Coord::new(1, 2)); // Red
        g.place_or_trade(Coord::new(2, 2)); // Blue centre
        g.place_or_trade(Coord::new(3, 2)); // Red
        g.place_or_trade(Coord::new(0, 0)); // Blue elsewhere
        g.place_or_trade(Coord::new(2, 1)); // Red
        g.place_or_trade(Coord::new(0, 1)); // Blue elsewhere
        g.place_or_trade(Coord::new(2, 3)); // Red completes the ring

        let fb = GameView.render(&g.snapshot(), &layout(), Viewport::new(60, 24));
        let (cx, cy) = layout().cell_centre(Coord::new(2, 2));
        assert_eq!(fb.get(cx, cy).unwrap().ch, VICTORY_MARK);
        let banner = fb.row_text(2);
        assert!(banner.contains("Red Wins!"), "got: {banner:?}");
    }

    #[test]
    fn test_grid_lines_interior_only() {
        let game = Game::new();
        let fb = render(&game);
        let l = layout();

        // A vertical separator inside the board.
        assert_eq!(fb.get(l.origin_x + l.cell_w, l.origin_y).unwrap().ch, '│');
        // Crossings are joined.
        assert_eq!(
            fb.get(l.origin_x + l.cell_w, l.origin_y + l.cell_h)
                .unwrap()
                .ch,
            '┼'
        );
        // No outer edge is drawn.
        assert_eq!(fb.get(l.origin_x, l.origin_y).unwrap().ch, ' ');
    }

    #[test]
    fn test_status_badges_and_no_prompt_in_regular_play() {
        let mut game = Game::new();
        let prompt_row = layout().origin_y + layout().height() + 1;
        // No prompt during regular play.
        let fb = render(&game);
        assert_eq!(fb.row_text(prompt_row).trim(), "");

        game.place_or_trade(Coord::new(0, 0));
        let fb = render(&game);
        let status = fb.row_text(layout().origin_y - 2);
        assert!(status.contains("Red 16 (0 wins)"), "got: {status:?}");
        assert!(status.contains("Blue 17 (0 wins)"), "got: {status:?}");
    }
}
