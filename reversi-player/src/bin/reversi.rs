use async_std::task;
use clap::Parser;
use itertools::Itertools;
use reversi_player::{play_configured, PlayerConfig};
use reversi_rules::Color;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PlayerConfig::parse();
    let outcome = match task::block_on(play_configured(&config)) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Game aborted: {}", err);
            std::process::exit(1);
        }
    };

    println!("\n{}\n", outcome.final_state);
    println!("Moves: {}", outcome.plies.iter().join(" "));
    match outcome.winner() {
        Some(winner) => println!(
            "Winner: {} ({} - {}).",
            winner,
            outcome.count_pieces(winner),
            outcome.count_pieces(!winner)
        ),
        None => println!(
            "Draw ({} - {}).",
            outcome.count_pieces(Color::Dark),
            outcome.count_pieces(Color::Light)
        ),
    }
}
