mod chapters;
mod cli;
mod commands;
mod error;
mod pdf;
mod plan;
mod slug;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::{error, Level};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Extract {
            document,
            chapters,
            out,
            trim_blank,
            chapter,
        } => {
            let options = commands::extract::ExtractOptions {
                trim_blank,
                chapter,
            };
            commands::extract::run(&document, &chapters, &out, &options)
        }
        Commands::Plan { document, chapters } => commands::plan::run(&document, &chapters),
        Commands::Upload { from, to } => commands::upload::run(&from, &to),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
