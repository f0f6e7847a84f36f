// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use xliffgen::app_config::{self, Config};
use xliffgen::app_controller::Controller;
use xliffgen::serializers::TranslationFormat;

/// CLI Wrapper for TranslationFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationFormat {
    Xliff,
    Xliff2,
}

impl From<CliTranslationFormat> for TranslationFormat {
    fn from(cli_format: CliTranslationFormat) -> Self {
        match cli_format {
            CliTranslationFormat::Xliff => TranslationFormat::Xliff,
            CliTranslationFormat::Xliff2 => TranslationFormat::Xliff2,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render extracted messages into a translation file
    Render(RenderArgs),

    /// Generate shell completions for xliffgen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Messages JSON file or directory of messages files
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Locale of the generated file (e.g., 'en', 'fr', 'pt-BR')
    #[arg(short, long)]
    locale: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<CliTranslationFormat>,

    /// Only write the target side of each message
    #[arg(long)]
    target_only: bool,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// xliffgen - XLIFF translation file generator
///
/// Renders messages extracted from application templates into XLIFF 1.2 or
/// XLIFF 2.0 translation files.
#[derive(Parser, Debug)]
#[command(name = "xliffgen")]
#[command(version)]
#[command(about = "Render extracted messages as XLIFF translation files")]
#[command(long_about = "xliffgen renders extracted translation messages as XLIFF files.

EXAMPLES:
    xliffgen render messages.json                      # Render with the default config
    xliffgen render -l fr messages.json                # Render for French
    xliffgen render --format xliff messages.json       # Write XLIFF 1.2
    xliffgen render --target-only -l de messages.json  # Omit source elements
    xliffgen render -o out/ locale/                    # Render every messages file in a directory
    xliffgen completions bash > xliffgen.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering follows log::max_level so the config can change it after init
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "xliffgen", &mut std::io::stdout());
            Ok(())
        }
        Commands::Render(args) => run_render(args),
    }
}

fn run_render(options: RenderArgs) -> Result<()> {
    // If log level is set via command line, apply it before loading the config
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(locale) = &options.locale {
        config.locale = locale.clone();
    }
    if let Some(format) = &options.format {
        config.format = format.clone().into();
    }
    if options.target_only {
        config.target_only = true;
    }
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = Some(output_dir.clone());
    }
    match &options.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        let output_dir = options.input_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        if let Some(path) = controller.run(options.input_path.clone(), output_dir, options.force_overwrite)? {
            info!("Success: {:?}", path);
        }
    } else if options.input_path.is_dir() {
        let written = controller.run_folder(options.input_path.clone(), options.force_overwrite)?;
        info!("Success: {} file(s) written", written.len());
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}
