mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};

use config::get_config_manager;
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play Tic-Tac-Toe against an unbeatable computer")]
struct Args {
    /// Path to the YAML config; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config).get_config()?;
    log!(
        "Computer move delay {} ms, reset delay {} ms",
        config.tictactoe.computer_move_delay_ms,
        config.tictactoe.reset_delay_ms
    );

    run_tictactoe_game(&config).await?;

    log!("Goodbye");
    Ok(())
}
