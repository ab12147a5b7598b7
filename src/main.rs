use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use smartfin::core::MemoryRouter;
use smartfin::menu::builtin;
use smartfin::{config, input, logging, ui, App};

#[derive(Debug, Parser)]
#[command(
    name = "smartfin",
    version,
    about = "SmartFin: navigation shell for the SmartFin-Go dashboard"
)]
struct Args {
    /// Location to open at start (e.g. /assets)
    #[arg(long)]
    start: Option<String>,

    /// Write logs to this file instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the initial shell state as JSON and exit
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load()?;

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .or_else(config::default_log_path);
    logging::init(log_path.as_deref());

    // A malformed menu must stop the shell before it becomes interactive
    let tree = builtin::smartfin_menu().context("invalid side menu declaration")?;
    let start = args.start.unwrap_or(config.start);
    let app = App::new(tree, MemoryRouter::new(&start), config.title, config.footer);
    info!(start = %app.layout.location, "shell mounted");

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&app.view())?);
        return Ok(());
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            info!("shell closed");
            return Ok(());
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::key_to_action(key),
            Event::Mouse(mouse) => {
                let areas = ui::layout::areas(terminal.size()?, app.layout.panel);
                input::mouse_to_action(mouse, &areas, &app.view())
            }
            _ => continue,
        };
        app.apply_action(action);
    }
}
