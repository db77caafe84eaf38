// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use speaker_srt::app_config::{Config, LogLevel};
use speaker_srt::{AppError, Controller};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract one speaker's lines into an SRT file (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for speaker-srt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
struct ConvertArgs {
    /// Input ASS subtitle file
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Speaker nickname, matched as "(nickname)" in the Name column, case-insensitive
    #[arg(short, long, env = "SPEAKER_SRT_NICKNAME", default_value = "")]
    nickname: String,

    /// Output SRT file (default: <input>_<nickname>_<timestamp>.srt next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// speaker-srt - one speaker's lines from ASS to SRT
///
/// Reads the [Events] table of an Advanced SubStation Alpha file, keeps the
/// Dialogue lines whose Name contains "(nickname)" and writes them as SRT.
#[derive(Parser, Debug)]
#[command(name = "speaker-srt")]
#[command(version)]
#[command(about = "Extract a single speaker's dialogue from an ASS file into SRT")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "speaker-srt extracts the dialogue lines of one speaker from an ASS subtitle file and saves them as SRT.

EXAMPLES:
    speaker-srt episode.ass -n RaxSon                  # Writes episode_RaxSon_<date>.srt next to the input
    speaker-srt episode.ass -n \"Big Bob\" -o bob.srt    # Explicit output file
    speaker-srt convert episode.ass -n alice -l debug  # Explicit subcommand with debug logging
    speaker-srt completions bash > speaker-srt.bash    # Generate bash completions

CONFIGURATION:
    A JSON configuration file can be passed with --config-path. It may set
    log_level, output.unknown_nickname_placeholder and output.timestamp_format.

EXIT STATUS:
    0 on success, 1 when nothing was converted (no input or no matching lines),
    2 on errors.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering happens through log::max_level so the level can change later
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("✅", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", colour, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Info until the command line or config says otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::from(2);
    }

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "speaker-srt", &mut std::io::stdout());
            ExitCode::SUCCESS
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => run_convert(cli.convert),
    }
}

fn run_convert(options: ConvertArgs) -> ExitCode {
    // If log level is set via command line, apply it immediately
    if let Some(level) = &options.log_level {
        log::set_max_level(LogLevel::from(level.clone()).into());
    }

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    let outcome = Controller::with_config(config).and_then(|controller| {
        controller.convert(
            options.input_path.as_deref(),
            &options.nickname,
            options.output.as_deref(),
        )
    });

    match outcome {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

// Warnings were already explained where they arose, but MissingInput is only seen here
fn report_failure(error: &AppError) -> ExitCode {
    if error.is_warning() {
        if matches!(error, AppError::MissingInput) {
            warn!("{}", error);
        }
        ExitCode::from(1)
    } else {
        error!("{}", error);
        ExitCode::from(2)
    }
}

fn load_config(options: &ConvertArgs) -> Result<Config> {
    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::default(),
    };

    match &options.log_level {
        // Update log level in config if specified via command line
        Some(level) => config.log_level = level.clone().into(),
        // Otherwise the config decides
        None => log::set_max_level(config.log_level.into()),
    }

    Ok(config)
}
