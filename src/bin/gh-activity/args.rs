//! CLI argument definitions for gh-activity.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};
use gh_activity::DEFAULT_API_URL;
use tracing::Level;

/// Show a GitHub user's recent public activity.
///
/// Events are fetched once, formatted by a pool of concurrent workers and
/// printed as they complete, so the output order may differ from the feed.
///
/// ## Examples
///
///   gh-activity octocat
///
///   gh-activity octocat -w 8 --color never
#[derive(Parser, Debug)]
#[command(name = "gh-activity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub account whose activity is shown
    pub username: Option<String>,

    // === Processing ===
    /// Number of formatting workers (must be >= 1)
    #[arg(short = 'w', long, default_value = "4", value_parser = parse_positive_usize)]
    pub workers: usize,

    /// Work queue capacity (must be >= 1)
    #[arg(long, default_value = "16", value_parser = parse_positive_usize)]
    pub queue_capacity: usize,

    // === Output ===
    /// Text printed in front of every line
    #[arg(long, default_value = "- ")]
    pub prefix: String,

    /// When to color the output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    // === API ===
    /// Base URL of the GitHub REST API
    #[arg(long, env = "GH_ACTIVITY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Personal access token sent as a bearer token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    // === Logging ===
    /// Log level
    #[arg(short = 'l', long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

/// Log level, written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}
