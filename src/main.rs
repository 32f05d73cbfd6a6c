use clap::Parser;
use colored::Colorize;

use breathbox::cli::args::{Cli, Commands};
use breathbox::cli::commands;
use breathbox::error::BreathboxError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BreathboxError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Start(args) => commands::start(&args, format)?,
        Commands::Plan(args) => commands::plan(&args, format)?,
        Commands::Tui => {
            breathbox::tui::run()?;
            String::new()
        }
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
