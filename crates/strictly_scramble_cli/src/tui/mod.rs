//! Terminal UI for Strictly Scramble

mod app;
mod ui;

pub use app::{Alert, App};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use strictly_scramble::{Dictionary, GameSession, RootWordSource};
use tracing::{error, info, instrument};

/// Runs the game in the terminal until the player quits.
///
/// Returns the final session so the caller can report on it after the
/// terminal has been restored.
pub fn run_tui<D: Dictionary, W: RootWordSource>(
    session: GameSession<D, W>,
) -> Result<GameSession<D, W>> {
    info!("Starting Strictly Scramble TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;

    info!("Player quit");
    Ok(app.into_session())
}

/// Draw, then wait briefly for a key; repeat until the app wants to quit.
#[instrument(skip_all)]
fn run_app<B, D, W>(terminal: &mut Terminal<B>, app: &mut App<D, W>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    D: Dictionary,
    W: RootWordSource,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }
    }
}
