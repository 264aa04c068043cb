//! Terminal UI for Dexdle.

mod app;
mod input;
mod ui;

use crate::controller::GameController;
use crate::roster::RosterProvider;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use app::{Action, App};
use input::map_key;
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal game until the player quits.
pub async fn run_tui<P: RosterProvider>(controller: GameController<P>) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("dexdle_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,dexdle=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Dexdle TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_game<P: RosterProvider>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: GameController<P>,
) -> Result<()> {
    let mut app = App::new();

    app.begin_loading();
    terminal.draw(|f| ui::draw(f, &app))?;
    let started = controller.start_session().await;
    app.session_started(started);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_input(map_key(key)) {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::InputChanged => {
                app.set_suggestions(controller.suggestions(app.input()));
            }
            Action::Submit(name) => {
                app.begin_guess(&name);
                terminal.draw(|f| ui::draw(f, &app))?;
                let report = controller.submit_guess(&name).await;
                app.apply_report(&name, report);
            }
            Action::Reset => {
                app.begin_loading();
                terminal.draw(|f| ui::draw(f, &app))?;
                let started = controller.reset_session().await;
                app.session_started(started);
            }
            Action::None => {}
        }
    }
}
