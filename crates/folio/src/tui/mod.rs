use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent};
use folio_app::PortfolioService;
use ratatui::layout::Rect;
use tracing::subscriber::NoSubscriber;

use crate::config::keybindings::{KeyBindingsConfig, load_config, validate_tui_config};

mod app;
mod clipboard;
pub mod constants;
mod handlers;
mod terminal;
mod view;
mod widgets;

use self::app::App;
use self::constants::TUI_TICK_RATE_MS;
use self::terminal::{CrosstermTerminal, restore_terminal, setup_terminal};
use self::view::Ui;

/// Launch the interactive TUI.
pub fn run(service: &PortfolioService) -> Result<()> {
    // Fail before touching the terminal when the user config is broken.
    let keybindings = match load_config(None)? {
        Some(config) => {
            validate_tui_config(&config.tui)?;
            config.tui.keybindings
        }
        None => KeyBindingsConfig::default(),
    };
    let app = App::new(service)?;

    let mut terminal = setup_terminal()?;
    let result = tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(&mut terminal, app, keybindings)
    });
    restore_terminal(&mut terminal);

    result
}

fn run_event_loop(
    terminal: &mut CrosstermTerminal,
    app: App,
    keybindings: KeyBindingsConfig,
) -> Result<()> {
    let mut ui = Ui::new(app, keybindings);

    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(TUI_TICK_RATE_MS);

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => ui.handle_key(key),
                CrosstermEvent::Mouse(mouse) => {
                    let size = terminal.size()?;
                    ui.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
