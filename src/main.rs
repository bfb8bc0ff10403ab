use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use arcade_snake::audio::{self, AudioSink, Silent, TerminalBell};
use arcade_snake::config::{FRAME_INTERVAL_MS, GRID_CELLS, THEME_CLASSIC, TICK_INTERVAL_MS};
use arcade_snake::food::FoodSpawner;
use arcade_snake::game::GameController;
use arcade_snake::grid::Grid;
use arcade_snake::input::{EventSource, GameEvent};
use arcade_snake::terminal_runtime::TerminalSession;
use clap::Parser;
use log::{LevelFilter, info};
use ratatui::backend::CrosstermBackend;
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; the same seed and keys replay the same game.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the terminal bell.
    #[arg(long)]
    mute: bool,

    /// Write diagnostics to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let grid = Grid::new(GRID_CELLS);
    let spawner = match cli.seed {
        Some(seed) => FoodSpawner::with_seed(grid, seed),
        None => FoodSpawner::from_entropy(grid),
    };
    let game = GameController::with_spawner(spawner).map_err(io::Error::other)?;

    let mut sink: Box<dyn AudioSink> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::stdout())
    };

    info!("starting on a {GRID_CELLS}x{GRID_CELLS} board, seed {:?}", cli.seed);

    let mut session = TerminalSession::enter(THEME_CLASSIC)?;
    run(&mut session, game, sink.as_mut())
}

fn run(
    session: &mut TerminalSession<CrosstermBackend<io::Stdout>>,
    mut game: GameController,
    sink: &mut dyn AudioSink,
) -> io::Result<()> {
    let mut events = EventSource::new(Duration::from_millis(TICK_INTERVAL_MS));
    let frame_budget = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        session.draw(&game)?;

        match events.next_event(frame_budget)? {
            Some(GameEvent::Quit) => break,
            Some(event) => audio::play_for(sink, game.apply(event)),
            None => {}
        }
    }

    info!("quit with score {}", game.score);
    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).map_err(io::Error::other)
}
