//! Provreg CLI - command-line client for the event registry service.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::search;

#[derive(Parser)]
#[command(name = "provreg")]
#[command(about = "Event registry query CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on stored events
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// Search for stored events
    Search(search::SearchOptions),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Event { command } => match command {
            EventCommands::Search(options) => search::run(options),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
