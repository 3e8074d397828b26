use clap::{Parser, ValueEnum};
use rand::{RngCore, SeedableRng};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use qecviz::SeededRandom;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Decimal u64 words
    U64,
    /// Hex u64 words, zero padded
    Hex,
    /// Doubles in [0, 1)
    F64,
}

#[derive(Debug, Parser)]
#[command(name = "rand-stream", about = "Print a reproducible xoroshiro128** stream")]
struct Args {
    /// Seed. Interpreted as a double whose bit pattern seeds the generator,
    /// unless --integer-seed is given.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    seed: String,

    /// Treat --seed as an unsigned 64-bit integer
    #[arg(long, default_value_t = false)]
    integer_seed: bool,

    /// Number of values to print
    #[arg(long, default_value_t = 8)]
    count: usize,

    #[arg(long, value_enum, default_value_t = Format::U64)]
    format: Format,

    /// Print the state words before drawing
    #[arg(long, default_value_t = false)]
    show_state: bool,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", value_parser = clap::value_parser!(LevelFilter))]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut rng = if args.integer_seed {
        let seed = args
            .seed
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid integer seed '{}': {e}", args.seed))?;
        SeededRandom::seed_from_u64(seed)
    } else {
        let seed = args
            .seed
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid seed '{}': {e}", args.seed))?;
        SeededRandom::from_f64_seed(seed)
    };
    debug!(s0 = rng.s0(), s1 = rng.s1(), "[rand-stream] seeded");

    if args.show_state {
        println!("s0 {:016x} ({})", rng.s0(), rng.s0_i64());
        println!("s1 {:016x} ({})", rng.s1(), rng.s1_i64());
    }

    for _ in 0..args.count {
        match args.format {
            Format::U64 => println!("{}", rng.next_u64()),
            Format::Hex => println!("{:016x}", rng.next_u64()),
            Format::F64 => println!("{:?}", rng.next_f64()),
        }
    }
    Ok(())
}
