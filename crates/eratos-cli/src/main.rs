//! Eratos CLI: the `eratos` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("eratos_kernel", log::LevelFilter::Debug);
        builder.filter_module("eratos", log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            bound,
            config,
            one_is_prime,
            json,
        } => commands::run::run(commands::run::Args {
            bound,
            config,
            one_is_prime,
            json,
        }),

        Commands::Animate {
            bound,
            config,
            interval_ms,
            max_steps,
            json,
        } => commands::animate::run(commands::animate::Args {
            bound,
            config,
            interval_ms,
            max_steps,
            json,
        }),

        Commands::Series {
            bound,
            config,
            after_steps,
            json,
        } => commands::series::run(bound, config, after_steps, json),

        Commands::Factors { n, json } => commands::factors::run(n, json),
    }
}
