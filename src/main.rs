//! Landing TUI - a generated landing page in the terminal
//!
//! Renders a randomly generated set of content sections with a navigation
//! bar, viewport-driven active highlighting, smooth scrolling and a
//! scroll-to-top control, styled with the Kanagawa Dragon theme.

mod app;
mod events;
mod nav;
mod page;
mod scroll;
mod theme;
mod ui;
mod viewport;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;

/// Frame rate for animations (approximately 30 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main entry point
fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().ok();

    // Optional seed argument for a reproducible page
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());

    run_tui(seed)
}

/// Run the TUI application
fn run_tui(seed: Option<u64>) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(seed);

    let result = run_event_loop(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Run the main event loop
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // The page viewport depends on the terminal size; recompute each
        // frame so resizes are picked up.
        let size = terminal.size()?;
        let (view_width, view_height) = ui::page_viewport(size.width, size.height);

        // Update animations and viewport observation
        app.tick(view_width, view_height);

        // Render the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input events with timeout for animation
        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
