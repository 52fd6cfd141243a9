use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eratos",
    about = "Eratos: step through the Sieve of Eratosthenes and inspect what it finds",
    version
)]
pub struct Cli {
    /// Log kernel progress at debug level (RUST_LOG also works)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the sieve to completion and print a summary
    Run {
        /// Upper bound N (overrides the config file)
        #[arg(long, allow_negative_numbers = true)]
        bound: Option<i64>,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Seed 1 as a sentinel prime instead of the unit state
        #[arg(long)]
        one_is_prime: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive the sieve one step per tick, printing every transition
    Animate {
        /// Upper bound N (overrides the config file)
        #[arg(long, allow_negative_numbers = true)]
        bound: Option<i64>,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Delay between steps in milliseconds (overrides the config file)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Stop after this many steps even if the sieve is not complete
        #[arg(long)]
        max_steps: Option<u64>,

        /// Emit one JSON object per step
        #[arg(long)]
        json: bool,
    },

    /// Print the actual-vs-estimated prime count series
    Series {
        /// Upper bound N (overrides the config file)
        #[arg(long, allow_negative_numbers = true)]
        bound: Option<i64>,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Sample after this many steps instead of at completion
        #[arg(long)]
        after_steps: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the factors of one integer
    Factors {
        /// The integer to factor (n >= 1)
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
