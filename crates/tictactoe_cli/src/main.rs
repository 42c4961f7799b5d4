//! Tic-tac-toe terminal driver.
//!
//! Plays games against the heuristic move selector or between two people
//! sharing a terminal, and runs computer-vs-computer batches.

#![warn(missing_docs)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod simulate;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use orchestrator::Orchestrator;
use players::{ComputerPlayer, HumanPlayer, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::io::BufRead;
use std::path::PathBuf;
use std::rc::Rc;
use tictactoe_engine::{Controller, GameMode, Player as Mark, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            local,
            first,
            seed,
            config,
        } => run_play(mode, local, first, seed, config),
        Command::Simulate { games, seed } => run_simulate(games, seed),
    }
}

/// Play one game on stdin/stdout
#[instrument]
fn run_play(
    mode: Option<GameMode>,
    local: Option<Mark>,
    first: Option<Mark>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };
    config.apply_overrides(mode, local, first, seed);

    let mode = *config.mode();
    if mode == GameMode::OnlineMultiplayer {
        bail!("Online multiplayer needs a remote room; this terminal build has none");
    }

    info!(%mode, local = %config.local_player(), "Starting game");
    println!("{}: you are {}", mode.name(), config.local_player());

    let stdin = Rc::new(RefCell::new(std::io::stdin().lock()));
    let session = Session::new(mode, *config.local_player());
    let player_x = build_player(&session, Mark::X, &stdin, *config.seed());
    let player_o = build_player(&session, Mark::O, &stdin, *config.seed());

    let mut orchestrator = Orchestrator::new(session, player_x, player_o, std::io::stdout());
    orchestrator.run(*config.first_player())?;
    Ok(())
}

/// Builds the participant for one side from the session's controllers.
fn build_player<R: BufRead + 'static>(
    session: &Session,
    mark: Mark,
    input: &Rc<RefCell<R>>,
    seed: Option<u64>,
) -> Box<dyn Player> {
    match session.controller(mark) {
        Controller::Computer => {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Box::new(ComputerPlayer::new(format!("Computer ({mark})"), rng))
        }
        Controller::Local | Controller::Remote => {
            Box::new(HumanPlayer::new(format!("Player {mark}"), Rc::clone(input)))
        }
    }
}

/// Run computer-vs-computer games and print the tally
#[instrument]
fn run_simulate(games: u32, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let tally = simulate::run(games, &mut rng)?;
    info!(?tally, "Simulation finished");
    println!("{tally}");
    Ok(())
}
