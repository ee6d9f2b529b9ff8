//! Single-hand simulation binary.
//!
//! Simulates one canonical starting hand at a given table size and prints
//! its win/tie/loss rates and equity.
//!
//! Usage: simulate HAND [PLAYERS] [SIMULATIONS]
//! Example: simulate AKs 6 50000

use std::process;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use holdem_equity::cards::StartingHand;
use holdem_equity::sim::EquityEstimator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let label = match args.first() {
        Some(label) => label,
        None => {
            println!("Usage: simulate HAND [PLAYERS] [SIMULATIONS]");
            println!("Example: simulate AKs 6 50000");
            process::exit(2);
        }
    };

    let hand = match StartingHand::from_label(label) {
        Some(hand) => hand,
        None => {
            eprintln!("Invalid hand: {} (expected e.g. AA, AKs, 72o)", label);
            process::exit(2);
        }
    };

    let players: usize = parse_or_exit(args.get(1), 6, "players");
    let sims: usize = parse_or_exit(args.get(2), 50_000, "simulations");

    println!(
        "Simulating {} at a {}-player table ({} simulations)...",
        hand, players, sims
    );

    if players < 2 {
        eprintln!("Need at least 2 players");
        process::exit(2);
    }

    let start = Instant::now();
    let mut rng = StdRng::from_entropy();
    let estimator = EquityEstimator::new();

    let result = match estimator.estimate(hand.sample_cards(), players - 1, sims, &mut rng) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            process::exit(1);
        }
    };

    println!("\nResults for {}:", hand);
    println!("  Equity:    {:.2}%", result.equity * 100.0);
    println!("  Win rate:  {:.2}%", result.win_rate * 100.0);
    println!("  Tie rate:  {:.2}%", result.tie_rate * 100.0);
    println!("  Loss rate: {:.2}%", result.loss_rate * 100.0);
    println!("\nDone in {:.2}s", start.elapsed().as_secs_f64());
}

fn parse_or_exit(arg: Option<&String>, default: usize, name: &str) -> usize {
    match arg {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Invalid {}: {}", name, raw);
                process::exit(2);
            }
        },
    }
}
