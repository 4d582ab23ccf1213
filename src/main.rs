use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use tile_snake::commands::CommandSender;
use tile_snake::config::{GameConfig, PALETTE_CLASSIC};
use tile_snake::error::Error;
use tile_snake::game::Game;
use tile_snake::input::{GameInput, map_key};
use tile_snake::renderer;
use tile_snake::terminal_runtime::TerminalSession;
use tile_snake::ticker::{IntervalTicker, TickDriver};
use tile_snake::ui::hud::HudInfo;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upper bound on how long the loop waits for input between frames.
const FRAME_BUDGET: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with game settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length in tiles.
    #[arg(long)]
    tiles: Option<u16>,

    /// Initial tick interval in milliseconds.
    #[arg(long = "speed")]
    speed_ms: Option<u64>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file (filter with RUST_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = load_config(&cli)?;
    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(&config, seed)?,
        None => Game::new(&config)?,
    };
    info!(tile_count = config.tile_count, seed = ?cli.seed, "starting tile-snake");

    let mut session = TerminalSession::enter()?;
    run(&mut session, &mut game)
}

fn load_config(cli: &Cli) -> Result<GameConfig, Error> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(tiles) = cli.tiles {
        config.tile_count = tiles;
    }
    if let Some(speed_ms) = cli.speed_ms {
        config.initial_speed_ms = speed_ms;
    }

    config.validate()?;
    Ok(config)
}

fn run(session: &mut TerminalSession, game: &mut Game) -> Result<(), Error> {
    let commands = game.sender();
    let mut ticker = IntervalTicker::new();
    ticker.start(game.state().interval());

    loop {
        session.draw(|frame| {
            let hud = HudInfo {
                best_score: game.best_score(),
                last_reset: game.last_reset(),
                palette: &PALETTE_CLASSIC,
            };
            renderer::render(frame, game.state(), &hud);
        })?;

        let wait = ticker
            .time_until_due(Instant::now())
            .map_or(FRAME_BUDGET, |until_due| until_due.min(FRAME_BUDGET));
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(GameInput::Quit) => break,
                    input => forward_input(&commands, input),
                }
            }
        }

        if ticker.poll(Instant::now()) {
            let outcome = game.step()?;
            if let Some(interval) = outcome.reschedule {
                ticker.reschedule(interval);
            }
        }
    }

    ticker.stop();
    info!(best_score = game.best_score(), ticks = game.tick_count(), "quit");
    Ok(())
}

fn forward_input(commands: &CommandSender, input: Option<GameInput>) {
    match input {
        Some(GameInput::Direction(direction)) => {
            commands.steer(direction);
        }
        Some(GameInput::Reset) => {
            commands.reset();
        }
        Some(GameInput::Quit) | None => {}
    }
}

fn init_logging(path: Option<&Path>) -> Result<(), Error> {
    let Some(path) = path else {
        return Ok(());
    };

    let log_file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
