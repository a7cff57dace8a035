use anyhow::Result;
use clap::Parser;
use kanban_reorder::{Board, EngineConfig};
use kanban_reorder_cli::logging::{configure_logging, log_level};
use kanban_reorder_cli::{replay, show, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    configure_logging(log_level(cli.verbose, cli.debug, cli.quiet));

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load_file(path)?,
        None => EngineConfig::load()?,
    };
    let board = match cli.command {
        Commands::Replay(args) => replay::run_replay(&args, config).await?,
        Commands::Show { user } => show::run_show(&user, &config).await?,
    };
    print_board(&board)
}

fn print_board(board: &Board) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(board)?);
    Ok(())
}
