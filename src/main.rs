use bataille::game::{GameConfig, DEFAULT_MAX_ROUNDS};
use bataille::rng::GameRng;
use bataille::simulation::{run_batch, run_game, BatchSummary};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bataille")]
#[command(about = "Bataille (War) card game simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Comma-separated player names
    #[arg(short, long, value_delimiter = ',', default_value = "Alice,Bob")]
    players: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game, printing every round (default)
    Play {
        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Only print the final result
        #[arg(short, long)]
        quiet: bool,

        /// Stop after this many rounds and give the cards to the leader
        #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: u32,
    },

    /// Simulate many games and report statistics
    Batch {
        /// Number of games to simulate
        #[arg(short, long, default_value = "1000")]
        num_games: usize,

        /// Base seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop each game after this many rounds
        #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: u32,

        /// Write the summary as JSON to this file
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            seed,
            quiet,
            max_rounds,
        }) => {
            play_single(&cli.players, seed.or(cli.seed), !quiet, max_rounds);
        }
        Some(Commands::Batch {
            num_games,
            seed,
            max_rounds,
            output,
        }) => {
            run_simulation(&cli.players, num_games, seed.or(cli.seed), max_rounds, output.as_deref());
        }
        None => {
            play_single(&cli.players, cli.seed, true, DEFAULT_MAX_ROUNDS);
        }
    }
}

fn play_single(players: &[String], seed: Option<u64>, verbose: bool, max_rounds: u32) {
    let seed = GameRng::new(seed).seed();
    let config = GameConfig {
        verbose,
        max_rounds: Some(max_rounds),
    };

    match run_game(players, seed, config) {
        Ok(result) => {
            if !verbose {
                println!(
                    "{} beats {} in {} rounds ({} battles, seed {})",
                    result.winner, result.loser, result.stats.rounds, result.stats.battles, result.seed
                );
            }
            if result.round_limit_reached {
                println!("Round limit of {} reached", max_rounds);
            }
        }
        Err(e) => {
            eprintln!("✗ Game failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_simulation(
    players: &[String],
    num_games: usize,
    seed: Option<u64>,
    max_rounds: u32,
    output: Option<&str>,
) {
    let base_seed = GameRng::new(seed).seed();

    println!("\n=== Bataille Simulator ===\n");
    println!("Players: {}", players.join(", "));
    println!("Games: {}", num_games);
    println!("Seed: {}", base_seed);
    println!();

    let start = std::time::Instant::now();
    let results = match run_batch(players, num_games, base_seed, max_rounds, true) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let summary = BatchSummary::from_results(&results, base_seed);
    println!("=== Results ===\n");
    println!("{}", summary);
    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        num_games as f64 / elapsed.as_secs_f64()
    );

    if let Some(path) = output {
        match summary.save(path) {
            Ok(()) => println!("Summary saved to: {}", path),
            Err(e) => eprintln!("✗ Failed to save summary to '{}': {}", path, e),
        }
    }
}
