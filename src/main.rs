//! Terminal Encompass runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for mouse and
//! key input and a full-redraw framebuffer renderer. The game is entirely
//! event-driven, so the loop blocks on the next terminal event; there is no
//! tick.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_encompass::core::Game;
use tui_encompass::input::{pointer_target, should_quit, wants_replay};
use tui_encompass::term::{Frame, GameView, TerminalRenderer, Viewport};
use tui_encompass::types::{BoardLayout, PointerTarget};

fn main() -> Result<()> {
    // Logging is opt-in via RUST_LOG; it writes to stderr so a redirect can
    // capture it without disturbing the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    info!(version = env!("CARGO_PKG_VERSION"), "starting encompass");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new();
    let view = GameView;
    let mut fb = Frame::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let layout = BoardLayout::centered(w, h);

        view.render_into(&game.snapshot(), &layout, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if wants_replay(key) {
                    game.replay();
                }
            }
            Event::Mouse(mouse) => {
                if let Some(target) = pointer_target(&mouse, &layout) {
                    match target {
                        PointerTarget::Cell(coord) => game.place_or_trade(coord),
                        PointerTarget::Outside { dx, dy } => game.outside_shift(dx, dy),
                    }
                }
            }
            Event::Resize(..) => {
                // Next pass re-reads the size and re-centres the layout.
            }
            _ => {}
        }
    }
}
