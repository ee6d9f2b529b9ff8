//! Batch equity generation binary.
//!
//! Generates equity data for all 169 starting hands across 2-6 player
//! tables, caching the result as JSON for fast subsequent runs.
//!
//! Usage: generate [--sims N] [--force] [--cache PATH] [--seed N]
//!                 [--threads N] [--summary]

use std::process;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use holdem_equity::batch::{
    generate_with_progress, load_or_generate_with_progress, CacheStatus, EquityCache, EquityTable,
};
use holdem_equity::cards::StartingHand;
use holdem_equity::sim::SimConfig;

struct Args {
    sims: usize,
    force: bool,
    cache: String,
    seed: Option<u64>,
    threads: Option<usize>,
    summary: bool,
}

fn main() {
    let args = parse_args();

    let mut config = SimConfig::default().with_trials(args.sims);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    println!("=== Starting-Hand Equity Generator ===");
    println!("Hands: 169, table sizes: 2-6 players");
    println!("Simulations per hand per table size: {}", args.sims);
    println!(
        "Total simulations: {}",
        169 * config.table_sizes.len() * args.sims
    );
    println!();

    let cache = EquityCache::new(&args.cache);
    let total_start = Instant::now();

    let pb = ProgressBar::new(169);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} hands ({eta})")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.set_message("Simulating");

    let (table, status) = if args.force {
        let table = match generate_with_progress(&config, |_| pb.inc(1)) {
            Ok(table) => table,
            Err(e) => {
                pb.abandon();
                eprintln!("Generation failed: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = cache.save(&table) {
            eprintln!("Could not save cache: {}", e);
            process::exit(1);
        }
        (table, None)
    } else {
        match load_or_generate_with_progress(&cache, &config, |_| pb.inc(1)) {
            Ok((table, status)) => (table, Some(status)),
            Err(e) => {
                pb.abandon();
                eprintln!("Generation failed: {}", e);
                process::exit(1);
            }
        }
    };
    pb.finish_and_clear();

    match status {
        Some(CacheStatus::Hit) => {
            println!("Using cached data from {}", args.cache);
            println!("  Generated at: {}", table.metadata.generated_at);
            println!("  Simulations per cell: {}", table.metadata.num_simulations);
        }
        Some(CacheStatus::Stale { cached_trials }) => {
            println!(
                "Cache had {} sims, requested {}; regenerated and saved to {}",
                cached_trials, args.sims, args.cache
            );
        }
        Some(CacheStatus::Miss) | None => {
            println!("Data generated and saved to {}", args.cache);
        }
    }

    println!("Total hands: {}", table.num_hands());
    println!("Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    if args.summary || args.force {
        print_summary(&table);
    }
}

fn parse_args() -> Args {
    let mut args = Args {
        sims: 50_000,
        force: false,
        cache: "equity_cache.json".to_string(),
        seed: None,
        threads: None,
        summary: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sims" | "-s" => args.sims = parse_value(iter.next(), &arg),
            "--cache" | "-c" => args.cache = required_value(iter.next(), &arg),
            "--seed" => args.seed = Some(parse_value(iter.next(), &arg)),
            "--threads" => args.threads = Some(parse_value(iter.next(), &arg)),
            "--force" | "-f" => args.force = true,
            "--summary" => args.summary = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    args
}

fn required_value(value: Option<String>, flag: &str) -> String {
    match value {
        Some(v) => v,
        None => {
            eprintln!("{} requires a value", flag);
            process::exit(2);
        }
    }
}

fn parse_value<T: std::str::FromStr>(value: Option<String>, flag: &str) -> T {
    match required_value(value, flag).parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid value for {}", flag);
            process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Usage: generate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -s, --sims N      Simulations per hand per table size (default: 50000)");
    println!("  -f, --force       Regenerate even if a matching cache exists");
    println!("  -c, --cache PATH  Cache file path (default: equity_cache.json)");
    println!("      --seed N      Seed for bit-reproducible tables");
    println!("      --threads N   Worker threads (default: cores - 1)");
    println!("      --summary     Print summary statistics after generation");
}

fn print_summary(table: &EquityTable) {
    println!();
    println!("{}", "=".repeat(60));
    println!("SUMMARY STATISTICS");
    println!("{}", "=".repeat(60));

    for &players in &[2u8, 6u8] {
        let mut equities: Vec<(String, f64)> = StartingHand::all()
            .iter()
            .filter_map(|hand| {
                let label = hand.label();
                table.result(&label, players).map(|r| (label, r.equity))
            })
            .collect();
        if equities.is_empty() {
            continue;
        }
        equities.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        println!("\nTop 10 Hands ({}-Player Equity):", players);
        for (i, (label, equity)) in equities.iter().take(10).enumerate() {
            println!("  {:2}. {:4} {:5.2}%", i + 1, label, equity * 100.0);
        }
    }

    if let Some(results) = table.hand("AA") {
        println!("\nPocket Aces (AA) Equity by Table Size:");
        for (players, result) in results {
            println!("  {} players: {:5.2}%", players, result.equity * 100.0);
        }
    }

    println!("\nSuited vs Offsuit at 6 Players (AK, AQ, KQ):");
    for (hi, lo) in [('A', 'K'), ('A', 'Q'), ('K', 'Q')] {
        let suited = table.result(&format!("{}{}s", hi, lo), 6);
        let offsuit = table.result(&format!("{}{}o", hi, lo), 6);
        if let (Some(s), Some(o)) = (suited, offsuit) {
            println!(
                "  {}{}s: {:5.2}%  |  {}{}o: {:5.2}%  |  delta: {:+.2}%",
                hi,
                lo,
                s.equity * 100.0,
                hi,
                lo,
                o.equity * 100.0,
                (s.equity - o.equity) * 100.0
            );
        }
    }
    println!();
}
