use std::io;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use caravel_core::{AppConfig, Deck};
use caravel_tui::{
    app::App,
    event::{AppEvent, EventHandler},
};

pub fn run(config: AppConfig, deck_path: Option<PathBuf>) -> Result<()> {
    // Load the deck before touching the terminal so a bad deck fails with
    // a plain error message.
    let deck = match &deck_path {
        Some(path) => Deck::load(path)?,
        None => Deck::sample(),
    };

    debug!(slides = deck.len(), "deck loaded");
    let mut app = App::new(config.clone(), deck)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("caravel")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        match event_handler.next(app.is_animating())? {
            Some(AppEvent::Key(key)) => app.handle_key(key),
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(AppEvent::Resize(columns, _rows)) => app.handle_resize(columns),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
