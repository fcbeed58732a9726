use crate::models::{Category, Theme};
use clap::{Parser, Subcommand};

/// Command-line interface definition for EaaS
#[derive(Parser)]
#[command(
    name = "eaas",
    version = env!("CARGO_PKG_VERSION"),
    about = "Excuse as a Service: a fresh work-from-home excuse in one command",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Generate a new excuse (never the same one twice in a row)
    Generate {
        #[arg(
            long,
            short = 'n',
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=100),
            help = "How many excuses to generate in a row"
        )]
        count: u32,

        #[arg(long, short = 'c', value_enum, help = "Only pick from this category")]
        category: Option<Category>,

        #[arg(long, help = "Seed the random source for reproducible picks")]
        seed: Option<u64>,

        #[arg(long, help = "Copy the last generated excuse to the clipboard")]
        copy: bool,

        #[arg(long = "no-delay", help = "Skip the dramatic pause")]
        no_delay: bool,
    },

    /// Show the most recent excuses
    History {
        #[arg(long, conflicts_with = "copy", help = "Clear the history")]
        clear: bool,

        #[arg(
            long,
            value_name = "N",
            help = "Copy entry N (1 = most recent) to the clipboard"
        )]
        copy: Option<usize>,
    },

    /// Show or change the color theme
    Theme {
        #[arg(long, conflicts_with = "set", help = "Switch between light and dark")]
        toggle: bool,

        #[arg(long, value_enum, help = "Set the theme explicitly")]
        set: Option<Theme>,
    },

    /// List the excuse catalog
    Catalog {
        #[arg(long, short = 'c', value_enum, help = "Only list this category")]
        category: Option<Category>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
