//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dressup_core::ItemRef;

#[derive(Parser)]
#[command(name = "dressup")]
#[command(about = "Dress up the base model from a wardrobe of layered images", long_about = None)]
pub(crate) struct Cli {
    /// Asset directory containing category folders and the base model
    /// (defaults to the stage layout's asset path)
    #[arg(short, long, global = true)]
    pub assets: Option<PathBuf>,

    /// Stage layout YAML to use instead of the one in the config directory
    #[arg(long, global = true)]
    pub layout: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List wardrobe categories, or the items of one category
    List {
        /// Category to list items for (case-insensitive)
        category: Option<String>,
    },

    /// Dress the model and save the result as a PNG
    Compose {
        /// Items to wear, applied in order (e.g., --wear TOPS=tee --wear EYES=blue)
        #[arg(short, long = "wear", value_name = "CATEGORY=ITEM")]
        wear: Vec<ItemRef>,

        /// Write the picture to this file instead of a timestamped screenshot
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for timestamped screenshots (default: from stage layout)
        #[arg(long)]
        screenshots: Option<PathBuf>,
    },

    /// Inspect or reset the stage layout configuration
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum LayoutAction {
    /// Print the effective stage layout
    Show,

    /// Print the layout file path
    Path,

    /// Overwrite the layout file with defaults
    Reset,
}
