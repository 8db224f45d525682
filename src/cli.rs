use crate::taxon::OutputMode;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Format taxon names given as arguments, or one per line on stdin.
    Format {
        /// Names to format; stdin is read when none are given.
        names: Vec<String>,

        /// Emphasis style for italicized components.
        #[arg(short, long, value_enum, default_value_t = OutputMode::Markdown)]
        mode: OutputMode,
    },

    /// Add a formatted-name column to a CSV export of specimen records.
    Csv {
        /// Path to the input CSV file.
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,

        /// Path to the output CSV file.
        #[arg(short, long, value_name = "FILE")]
        output_file: PathBuf,

        /// Column holding the raw scientific names.
        #[arg(long, default_value = "scientific_name")]
        column: String,

        /// Name of the appended column.
        #[arg(long, default_value = "formatted_name")]
        target_column: String,

        #[arg(short, long, value_enum, default_value_t = OutputMode::Html)]
        mode: OutputMode,
    },

    /// Run the page-ready behaviours on a JSON page model.
    Page {
        /// Path to the page JSON file.
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,

        /// Optional JSON file overriding selectors, labels and classes.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Clicks to send to the sensitive-info toggle after setup.
        #[arg(long, default_value_t = 0)]
        clicks: usize,

        /// Where to write the resulting page; stdout when omitted.
        #[arg(short, long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },
}
