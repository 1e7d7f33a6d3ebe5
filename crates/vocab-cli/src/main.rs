//! Vocabulary review CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use vocab_cli::commands::{NewSession, run_export, run_new, run_progress, run_review};
use vocab_cli::logging::{LogConfig, LogFormat, init_logging};
use vocab_cli::settings::Settings;
use vocab_cli::summary::print_progress;
use vocab_model::WordState;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    match cli.command {
        Command::New(args) => {
            let options = NewSession {
                words: args.words,
                name: args.name,
                output: args.output,
                force: args.force,
            };
            let path = run_new(&options, &settings)?;
            println!("Created {}", path.display());
        }
        Command::Review(args) => run_review(&args.session)?,
        Command::Progress(args) => {
            let (name, progress) = run_progress(&args.session)?;
            print_progress(&name, &progress);
        }
        Command::Export(args) => {
            let states: Vec<WordState> = if args.states.is_empty() {
                settings.export.states.clone()
            } else {
                args.states.into_iter().map(WordState::from).collect()
            };
            let count = run_export(&args.session, &states, &args.output)?;
            println!("Wrote {count} words to {}", args.output.display());
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
