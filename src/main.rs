use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::clock::FrameClock;
use flappy::game::{Control, Game};
use flappy::input::map_event;
use flappy::logging::init_file_logger;
use flappy::ui::draw_ui;
use flappy::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Flap through the pipes. Space to flap, R to restart, Q to quit.
#[derive(Parser, Debug)]
#[command(name = "flappy", version = build_info::BUILD_VERSION)]
struct Cli {
    /// JSON config file (defaults to config.json in the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for pipe placement, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logger(path)
            .with_context(|| format!("could not open log file {}", path.display()))?;
    }

    let config = GameConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(config, &mut rng)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game, &mut rng);
    let cleanup = restore_terminal(&mut terminal);

    result?;
    cleanup?;
    println!("Best score: {}", game.best_score);
    Ok(())
}

/// Leave raw mode and the alternate screen, attempting every step even if
/// an earlier one fails. Returns the first error.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = terminal.backend_mut().execute(LeaveAlternateScreen).map(|_| ());
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Frame loop: gather input, step the game, draw, then wait out the frame.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game,
    rng: &mut StdRng,
) -> Result<()> {
    let mut clock = FrameClock::new(game.config.tick_duration());
    let mut inputs = Vec::new();

    loop {
        inputs.clear();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = map_event(event::read()?) {
                inputs.push(input);
            }
        }

        if game.step(&inputs, rng) == Control::Quit {
            return Ok(());
        }

        terminal.draw(|frame| draw_ui(frame, game))?;
        clock.wait();
    }
}
