use anyhow::{bail, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

mod app;
mod render;

use app::{App, AppCommand};
use common::{EdgePolicy, GameConfig, DEFAULT_CELL_SIZE};

fn main() -> Result<()> {
    // Logs go to stderr so they can be redirected away from the UI;
    // silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Edge policy from args: wrap (default) or lethal
    let edge_policy = match std::env::args().nth(1).as_deref() {
        None | Some("wrap") => EdgePolicy::Wrap,
        Some("lethal") => EdgePolicy::Lethal,
        Some(other) => bail!("unknown edge policy {other:?}, expected \"wrap\" or \"lethal\""),
    };

    let config = board_config(edge_policy)?;
    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    tracing::info!(
        width = config.width,
        height = config.height,
        ?edge_policy,
        "starting session"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(config, seed);

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Derive the board from the terminal viewport, leaving room for the
/// border. One board cell is drawn as 2x1 characters, hence the halved
/// column count. The dimensions are fixed for the whole session; resizing
/// the terminal mid-game is ignored.
fn board_config(edge_policy: EdgePolicy) -> Result<GameConfig> {
    let (columns, rows) = crossterm::terminal::size()?;
    let cell_columns = i32::from(columns.saturating_sub(2) / 2).clamp(10, 60);
    let cell_rows = i32::from(rows.saturating_sub(3)).clamp(10, 40);
    Ok(GameConfig::new(
        cell_columns * DEFAULT_CELL_SIZE,
        cell_rows * DEFAULT_CELL_SIZE,
        edge_policy,
    ))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_update = std::time::Instant::now();

    loop {
        // Calculate delta time
        let now = std::time::Instant::now();
        let dt = now.duration_since(last_update);
        last_update = now;

        // Update app state
        app.update(dt);

        // Draw
        terminal.draw(|f| app.render(f))?;

        // Handle input
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = app.handle_input(key) {
                        match command {
                            AppCommand::Quit => return Ok(()),
                            _ => app.handle_command(command)?,
                        }
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}
