//! dressup CLI
//!
//! Command-line front end for the dress-up wardrobe: list what is in the
//! asset folder and render outfits to PNG without opening a window.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List { category } => {
            let layout = commands::load_layout(cli.layout.as_deref())?;
            let root = commands::asset_root(cli.assets, &layout);
            commands::list::run_list(&root, category.as_deref())
        }
        Commands::Compose {
            wear,
            output,
            screenshots,
        } => {
            let layout = commands::load_layout(cli.layout.as_deref())?;
            let root = commands::asset_root(cli.assets, &layout);
            commands::compose::run_compose(&layout, &root, &wear, output, screenshots)
        }
        Commands::Layout { action } => commands::layout::run_layout(action, cli.layout),
    }
}
