//! Meander - A terminal-based tour route viewer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use meander::app::App;
use meander::route::RouteReader;
use meander::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Conventional result file read when no path is given.
const RESULT_FILE: &str = "result.txt";

#[derive(Parser, Debug)]
#[command(name = "meander")]
#[command(about = "A terminal-based tour route viewer", long_about = None)]
struct Args {
    /// Path to the route file (defaults to result.txt in the current directory)
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Meander");
    }

    let path = args
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(RESULT_FILE));

    // Load the route before touching the terminal so every failure lands on
    // a clean stderr with a nonzero exit code.
    let app = match RouteReader::read_file(&path).and_then(|route| App::new(path.clone(), route)) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("Failed to load route: {}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };
    tracing::info!(
        "Loaded {} stops from {}",
        app.route.len(),
        app.file_path.display()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Meander exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Step along the tour
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.cursor_prev();
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.cursor_next();
                    },

                    // Vim navigation
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            app.cursor_first();
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        app.cursor_last();
                    },

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_summary();
                    },

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.show_help();
                    },

                    _ => {
                        pending_g = false;
                    },
                }
            }
        }
    }
}
