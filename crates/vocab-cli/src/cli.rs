//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vocab_model::WordState;

#[derive(Parser)]
#[command(
    name = "vocab",
    version,
    about = "Review a ranked word list and mark the words you know",
    long_about = "Review the vocabulary of a text word by word.\n\n\
                  Start a session from a ranked word list (CSV with word,occurrences),\n\
                  mark words as known or unknown, filter and search the list,\n\
                  and export the words you want to learn."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start a new session from a ranked word list.
    New(NewArgs),

    /// Review words interactively.
    Review(ReviewArgs),

    /// Show review progress for a session.
    Progress(SessionArgs),

    /// Write the words in the chosen states to a text file.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct NewArgs {
    /// CSV word list with `word,occurrences` columns, most frequent first.
    #[arg(value_name = "WORDS_CSV")]
    pub words: PathBuf,

    /// Session name (default: the word list's file name).
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Session file to create (default: <WORDS_CSV> with a .vocab.json extension).
    #[arg(long = "output", short = 'o', value_name = "SESSION")]
    pub output: Option<PathBuf>,

    /// Replace an existing session file.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Parser)]
pub struct ReviewArgs {
    /// Session file to review.
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Session file.
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Session file.
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,

    /// Word states to export (default from settings, usually unknown).
    #[arg(long = "state", value_enum, value_delimiter = ',')]
    pub states: Vec<StateArg>,

    /// Output text file, one word per line.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: PathBuf,
}

/// CLI word state choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StateArg {
    Known,
    Unknown,
    Unclassified,
}

impl From<StateArg> for WordState {
    fn from(value: StateArg) -> Self {
        match value {
            StateArg::Known => WordState::Known,
            StateArg::Unknown => WordState::Unknown,
            StateArg::Unclassified => WordState::Unclassified,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
