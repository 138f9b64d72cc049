//! CLI frontend for the World of Darkness dice roller.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wod",
    about = "World of Darkness dice roller",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a splat and roll interactively until you stop
    Play {
        /// Skip the menu and play this splat (e.g. mage, wraith)
        #[arg(short, long)]
        splat: Option<String>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll a pool of d10s once
    Roll(commands::roll::RollArgs),

    /// List every splat and the rolls it can make
    Splats,

    /// Serve the dice roller as an HTTP API
    Serve {
        /// Interface to bind (default: WOD_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default: WOD_PORT or 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// RNG seed for reproducible rolls (default: WOD_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Largest pool a request may roll (default: WOD_MAX_DICE or 100)
        #[arg(long)]
        max_dice: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { splat, seed } => commands::play::run(splat.as_deref(), seed),
        Commands::Roll(args) => commands::roll::run(&args),
        Commands::Splats => commands::splats::run(),
        Commands::Serve {
            host,
            port,
            seed,
            max_dice,
        } => commands::serve::run(host, port, seed, max_dice),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
