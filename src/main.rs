use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use klondike_engine::Game;

#[derive(Parser, Debug)]
#[command(version, about = "Deal a Klondike game and show its starting state")]
struct Args {
    /// Seed naming the deal; defaults to the current time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cards turned over by each draw from the stock
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=24))]
    draws: u64,

    /// Print the dealt state as JSON instead of a table
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    });
    let game = Game::with_seed(seed, args.draws as usize);

    if args.json {
        match serde_json::to_string_pretty(&game) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("error: could not serialize game: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    if args.no_color {
        colored::control::set_override(false);
    }

    println!("Seed: {} (draw {})", seed, game.draws());
    println!("{}", game.state());
    println!("Hash: {}", game.state().hash());
}
