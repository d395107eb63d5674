use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::process;

use parfind::{SearchConfig, search_all, search_last};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "parfind")]
#[command(about = "parfind - parallel array search demo")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the last occurrence of the target value
    Last {
        /// Number of array elements to generate
        #[arg(long, default_value_t = 100)]
        size: usize,
        /// Value to search for
        #[arg(long, default_value_t = 5)]
        target: i64,
        /// Number of worker threads
        #[arg(long, default_value_t = 2)]
        workers: usize,
        /// Seed for the generated array (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Collect every occurrence of the target value, descending
    All {
        /// Number of array elements to generate
        #[arg(long, default_value_t = 1000)]
        size: usize,
        /// Value to search for
        #[arg(long, default_value_t = 42)]
        target: i64,
        /// Number of worker threads
        #[arg(long, default_value_t = 4)]
        workers: usize,
        /// Seed for the generated array (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Last {
            size,
            target,
            workers,
            seed,
        } => {
            // Random values 0-9, with the target planted at a few known spots.
            let array = generate_array(size, 10, target, &[30, 60, 85], seed);
            print_sample(&array);

            let config = SearchConfig::default().with_workers(workers);
            match search_last(&array, target, &config) {
                Some(index) => println!("Last occurrence of {} found at index: {}", target, index),
                None => println!("Value {} not found in the array", target),
            }
        }
        Commands::All {
            size,
            target,
            workers,
            seed,
        } => {
            // Random values 0-99, with the target planted at a few known spots.
            let array = generate_array(size, 100, target, &[200, 350, 500, 650, 800], seed);
            print_sample(&array);
            println!("Target value: {}", target);

            let config = SearchConfig::default().with_workers(workers);
            match search_all(&array, target, &config) {
                Ok(indices) if indices.is_empty() => {
                    println!("Target value not found in the array.");
                }
                Ok(indices) => {
                    let rendered: Vec<String> =
                        indices.iter().map(|index| index.to_string()).collect();
                    println!("All occurrences in descending order: {}", rendered.join(" "));
                }
                Err(err) => {
                    eprintln!("Search failed: {}", err);
                    process::exit(1);
                }
            }
        }
    }
}

/// Fill an array with random values in `0..bound`, then plant the target at
/// the given indices (skipping any that fall outside the array).
fn generate_array(
    size: usize,
    bound: i64,
    target: i64,
    planted: &[usize],
    seed: Option<u64>,
) -> Vec<i64> {
    let mut rng: ChaCha8Rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let mut array: Vec<i64> = (0..size).map(|_| rng.random_range(0..bound)).collect();
    for &index in planted {
        if index < array.len() {
            array[index] = target;
        }
    }
    array
}

/// Print the first few elements so the run is inspectable.
fn print_sample(array: &[i64]) {
    let shown: Vec<String> = array
        .iter()
        .take(10)
        .map(|value| value.to_string())
        .collect();
    println!(
        "Array content (first {} elements): {} ...",
        shown.len(),
        shown.join(" ")
    );
}
