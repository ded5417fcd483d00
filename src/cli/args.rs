// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// A bookmark manager for the terminal
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color", help = "disable colored output")]
    pub no_color: bool,

    #[arg(long = "generate-config", help = "print a default configuration file")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a bookmark, prints its id
    Add {
        url: String,
        /// Display name, defaults to the page title or the URL host
        name: Option<String>,
        #[arg(short = 'n', long = "name", help = "display name", conflicts_with = "name")]
        name_flag: Option<String>,
        #[arg(long = "no-web", help = "do not fetch the page title")]
        no_web: bool,
    },
    /// List all bookmarks
    List {
        #[arg(short = 'j', long = "json", help = "output as json", conflicts_with = "is_md")]
        is_json: bool,
        #[arg(short = 'm', long = "md", help = "output as markdown list")]
        is_md: bool,
    },
    /// Show bookmarks (list of ids, separated by comma, no blanks)
    Show { ids: String },
    /// Open bookmarks in the default browser
    Open {
        /// list of ids, separated by comma, no blanks
        ids: String,
    },
    /// Update name and/or url of a bookmark
    Update {
        id: i64,
        #[arg(long = "name", help = "new name")]
        name: Option<String>,
        #[arg(long = "url", help = "new url")]
        url: Option<String>,
    },
    /// Delete bookmarks
    Delete {
        /// list of ids, separated by comma, no blanks
        ids: String,
    },
    /// Delete all bookmarks
    DeleteAll {
        #[arg(short = 'y', long = "yes", help = "do not ask for confirmation")]
        yes: bool,
    },
    /// Export all bookmarks, format from extension: .json, .md, anything else is text
    Export {
        /// pathname of the output file
        path: PathBuf,
    },
    /// Import bookmarks from a JSON export
    Import {
        /// pathname to json file
        path: PathBuf,
    },
    /// Initialize bookmark database
    CreateDb {
        /// pathname to database file
        path: String,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}
