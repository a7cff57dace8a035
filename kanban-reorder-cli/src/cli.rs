//! CLI definition for the kanban reorder tool.
//!
//! Only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Kanban reorder - replay drag gestures against a board
#[derive(Parser, Debug)]
#[command(name = "kanban-reorder")]
#[command(version)]
#[command(about = "Replay drag gestures and board edits against a kanban board")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Load configuration from this file instead of the current directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a script of drag events and intents, then print the resulting board
    Replay(ReplayArgs),
    /// Print the stored board for a user
    Show {
        /// Email of the board owner
        #[arg(long)]
        user: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// JSON array of steps; each is a drag event or an intent
    #[arg(long)]
    pub script: PathBuf,

    /// Starting board (defaults to the stored board, or an empty one)
    #[arg(long)]
    pub board: Option<PathBuf>,

    /// Owner email; enables loading and persisting the user's board
    #[arg(long)]
    pub user: Option<String>,

    /// Use counter-based ids instead of random ones
    #[arg(long)]
    pub sequential_ids: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "kanban-reorder",
            "-d",
            "replay",
            "--script",
            "steps.json",
            "--user",
            "ada@example.com",
            "--sequential-ids",
        ])
        .unwrap();
        assert!(cli.debug);
        match cli.command {
            Commands::Replay(args) => {
                assert_eq!(args.script, PathBuf::from("steps.json"));
                assert_eq!(args.user.as_deref(), Some("ada@example.com"));
                assert!(args.sequential_ids);
                assert!(args.board.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_user() {
        assert!(Cli::try_parse_from(["kanban-reorder", "show"]).is_err());
    }
}
