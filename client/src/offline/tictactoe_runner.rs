use common::games::tictactoe::TicTacToeRunner;
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{ClientCommand, HELP_TEXT};
use crate::ui::BoardRenderer;

use super::LocalBroadcaster;

pub async fn run_tictactoe_game(config: &Config) -> std::io::Result<()> {
    let (snapshot_tx, mut snapshot_rx) = mpsc::unbounded_channel();
    let runner = TicTacToeRunner::new(config.tictactoe, LocalBroadcaster::new(snapshot_tx));
    let renderer = BoardRenderer::new(&config.ui);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP_TEXT);
    runner.start().await;

    loop {
        tokio::select! {
            Some(snapshot) = snapshot_rx.recv() => {
                println!("\n{}", renderer.render(&snapshot));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    log!("Input closed, leaving game");
                    break;
                };

                match ClientCommand::parse(&line) {
                    Ok(ClientCommand::PlaceMark { index }) => {
                        if let Err(e) = runner.handle_click(index).await {
                            println!("{}", e);
                        }
                    }
                    Ok(ClientCommand::NewGame) => runner.reset().await,
                    Ok(ClientCommand::Help) => println!("{}", HELP_TEXT),
                    Ok(ClientCommand::Quit) => break,
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}
