//! cmdbot: map chat messages to configured shell commands and run them
//! without blocking the message loop. Config comes from a JSON file given on
//! the command line.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;

use cmdbot_core::{command::Commander, config::Config};

#[derive(Parser)]
#[command(name = "cmdbot")]
#[command(about = "Chat bot that runs statically configured shell commands", long_about = None)]
struct Cli {
    /// Path to the secret JSON config file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let Some(config_path) = cli.config else {
        eprintln!("Config file path required (-c/--config).");
        std::process::exit(1);
    };

    if let Err(err) = run(&config_path).await {
        eprintln!("Error:\n{err}");
        std::process::exit(1);
    }
}

async fn run(config_path: &std::path::Path) -> anyhow::Result<()> {
    cmdbot_core::logging::init("cmdbot")?;

    println!("Loading config...");
    let cfg = Arc::new(Config::load(config_path)?);
    println!("Config loaded.");

    let commander = Arc::new(Commander::new(cfg.commands.clone()));

    println!("Start client.");
    println!("------------------------");
    cmdbot_telegram::router::run_polling(cfg, commander).await
}
