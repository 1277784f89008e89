//! xdt-apply - apply config transforms in place
//!
//! Resolves a configuration-transform file (app.Release.config,
//! web.Staging.config, ...) to the destination file its name implies,
//! gates the selection on project type, XML well-formedness and
//! destination existence, and delegates the actual merge to an external
//! XML document-transform engine.

use clap::Parser;

mod cli;
mod commands;
mod destination;
mod engine;
mod error;
mod gate;
mod matcher;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
