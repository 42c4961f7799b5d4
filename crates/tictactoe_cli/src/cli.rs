//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{GameMode, Player as Mark};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the heuristic engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game on this terminal
    Play {
        /// Game mode (single-player, local-multiplayer)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Mark played by the person at this terminal (X or O)
        #[arg(long)]
        local: Option<Mark>,

        /// Mark that moves first (X or O)
        #[arg(long)]
        first: Option<Mark>,

        /// Seed for the computer's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML play config; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play the computer against itself and print the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "play",
            "--mode",
            "local-multiplayer",
            "--local",
            "o",
            "--seed",
            "7",
        ]);
        match cli.command {
            Command::Play {
                mode,
                local,
                first,
                seed,
                config,
            } => {
                assert_eq!(mode, Some(GameMode::LocalMultiplayer));
                assert_eq!(local, Some(Mark::O));
                assert_eq!(first, None);
                assert_eq!(seed, Some(7));
                assert!(config.is_none());
            }
            other => panic!("expected play, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let cli = Cli::parse_from(["tictactoe", "simulate"]);
        assert!(matches!(
            cli.command,
            Command::Simulate {
                games: 100,
                seed: None
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["tictactoe", "play", "--mode", "hotseat"]);
        assert!(result.is_err());
    }
}
