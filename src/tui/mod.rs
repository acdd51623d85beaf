pub mod app;
pub mod draw;

mod app_tests;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::application::todo_list::TodoList;
use crate::config::Config;
use crate::domain::clock::Clock;
use crate::infrastructure::clock::SystemClock;

use self::app::App;

/// Takes over the terminal until the user quits, then restores it.
pub fn run(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(TodoList::new(SystemClock));
    let res = run_app(&mut terminal, &mut app, config.tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn run_app<C: Clock>(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<C>, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| app.draw(f))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }
        if app.should_quit() {
            break;
        }
        // Ages are recomputed on every draw; the tick just bounds how stale they get.
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
    tracing::info!(items = app.list().state().items().len(), "quit");
    Ok(())
}
