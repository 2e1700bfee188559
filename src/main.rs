use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use amazora::config::AppConfig;
use amazora::logging::{init_logging, LogLevel, LoggingConfig};
use amazora::navigation::{GoalId, StageId};
use amazora::ui::tui;
use amazora::ui::walkthrough::{run_walkthrough, OutputFormat, WalkthroughOptions};

/// Output format for the walkthrough
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// Rendered screens
    #[default]
    Text,
    /// One JSON snapshot per line
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "amazora")]
#[command(version)]
#[command(about = "Menopause fitness & wellness onboarding for women 40+")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, short, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable screen fades
    #[arg(long, global = true)]
    no_animation: bool,

    /// Disable colors (also respects NO_COLOR environment variable)
    #[arg(long, global = true)]
    no_color: bool,

    /// Suppress all log output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Open the interactive onboarding (default if no command given)
    Run {
        /// Write logs to this file (the TUI owns the terminal)
        #[arg(long, value_name = "FILE")]
        log_file: Option<PathBuf>,
    },
    /// Print every step of the onboarding funnel without a terminal UI
    Walkthrough {
        /// Menopause stage to pick
        #[arg(long, default_value = "menopause")]
        stage: StageId,

        /// Goal to toggle (repeatable, in order)
        #[arg(long = "goal", value_name = "GOAL")]
        goals: Vec<GoalId>,

        /// Output format
        #[arg(long, short = 'f', default_value = "text", value_enum)]
        format: CliOutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn load_config(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.no_animation {
        config.animation.enabled = false;
    }
    Ok(config)
}

fn stderr_logging(cli: &Cli) -> LoggingConfig {
    if cli.quiet {
        LoggingConfig::off()
    } else {
        // Walkthrough output goes to stdout; keep stderr to warnings unless asked.
        match cli.verbose {
            0 => LoggingConfig::new().with_level(LogLevel::Warn),
            v => LoggingConfig::from_verbosity(v - 1),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return Ok(ExitCode::from(2));
        }
    };

    match cli.command {
        None => run_tui(&cli, config, None).await?,
        Some(Commands::Run { ref log_file }) => run_tui(&cli, config, log_file.clone()).await?,
        Some(Commands::Walkthrough {
            stage,
            ref goals,
            format,
        }) => {
            init_logging(stderr_logging(&cli))?;

            let use_color = !cli.no_color
                && std::env::var("NO_COLOR").is_err()
                && io::stdout().is_terminal();
            let options = WalkthroughOptions {
                stage,
                goals: if goals.is_empty() {
                    vec![GoalId::Mood]
                } else {
                    goals.clone()
                },
                format: format.into(),
                color: use_color,
                ..WalkthroughOptions::default()
            };

            let mut stdout = io::stdout().lock();
            if let Err(err) = run_walkthrough(&config, &options, &mut stdout) {
                tracing::error!("walkthrough stopped: {}", err);
                eprintln!("error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_tui(
    cli: &Cli,
    config: AppConfig,
    log_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let logging = match log_file {
        Some(path) if !cli.quiet => LoggingConfig::from_verbosity(cli.verbose).with_file(path),
        _ => LoggingConfig::off(),
    };
    init_logging(logging)?;

    if !io::stdout().is_terminal() {
        return Err("the interactive onboarding needs a terminal; try `amazora walkthrough`".into());
    }

    tracing::info!(
        fade_out_ms = config.animation.fade_out_ms,
        fade_in_ms = config.animation.fade_in_ms,
        "starting onboarding"
    );
    tui::run(config).await?;
    Ok(())
}
