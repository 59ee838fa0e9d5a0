// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional, defaults to the user config dir)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (generate, init, or models)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate flashcards for every tagged note in a folder
    Generate {
        /// Folder containing markdown notes
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Include notes in subfolders
        #[arg(short, long)]
        recursive: bool,

        /// Model to use instead of the configured one
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,

        /// Question/answer separator instead of the configured one
        #[arg(short, long, value_name = "SEPARATOR")]
        separator: Option<String>,

        /// Marker tag instead of the configured one
        #[arg(short, long, value_name = "TAG")]
        tag: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// List the models offered out of the box
    Models,
}
