use std::path::PathBuf;
use std::process::ExitCode;

use boxed_snake::config::{DEFAULT_SIDE, GameConfig, TICK_INTERVAL};
use boxed_snake::error::GameError;
use boxed_snake::game::{self, Game, Outcome};
use boxed_snake::input::KeyboardInput;
use boxed_snake::logging::init_file_logger;
use boxed_snake::renderer::ensure_fits;
use boxed_snake::terminal_runtime::{TerminalSession, announce_loss, install_panic_hook};
use clap::Parser;
use log::info;
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Side length of the square play field.
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    side: u16,

    /// Seed for fruit placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level used with `--log-file`.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match play(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", failure_message(&error));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(error: &GameError) -> String {
    format!("boxed-snake: {error}")
}

fn play(cli: Cli) -> Result<(), GameError> {
    if let Some(path) = &cli.log_file {
        init_file_logger(path, cli.log_level)?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = GameConfig::new(cli.side, seed)?;
    info!("starting: side {}, seed {}", config.side, config.seed);

    install_panic_hook();

    if let Outcome::Lost(_) = run(config)? {
        announce_loss()?;
    }

    Ok(())
}

fn run(config: GameConfig) -> Result<Outcome, GameError> {
    let mut session = TerminalSession::enter()?;
    ensure_fits(session.size()?, config.side)?;
    let mut state = Game::new(config);

    let mut input = KeyboardInput::new();
    game::run(&mut state, &mut input, &mut session, TICK_INTERVAL)
}
