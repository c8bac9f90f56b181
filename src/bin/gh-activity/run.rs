//! Main execution logic for the gh-activity CLI.

use anyhow::Result;
use gh_activity::{Config, EventSource, GitHubSource, Pipeline, RunReport, WriterSink};
use tracing::{Level, debug};
use tracing_subscriber::fmt;

use crate::args::{Cli, LogLevel};

/// Initialize logging.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr); // Log to stderr so stdout is clean for output

    subscriber.init();

    Ok(())
}

/// Build the pipeline configuration from the CLI flags.
pub fn config(args: &Cli) -> Config {
    Config::default()
        .with_worker_count(args.workers)
        .with_work_queue_capacity(args.queue_capacity)
        .with_prefix(args.prefix.as_str())
        .with_color(args.color.enabled())
}

/// Fetch the feed for `user` and print it through the worker pool.
pub async fn execute(args: &Cli, user: &str) -> Result<RunReport> {
    let config = config(args);
    let pipeline = Pipeline::new(config)?;

    let mut source = GitHubSource::new(&args.api_url)?;
    if let Some(token) = &args.token {
        source = source.with_token(token.as_str());
    }

    let events = source.fetch(user).await?;
    debug!(user, events = events.len(), "Fetched activity feed");

    let mut sink = WriterSink::stdout(pipeline.config().palette());
    let report = pipeline.run(events, &mut sink).await?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ColorChoice;
    use clap::Parser;

    #[test]
    fn test_config_from_flags() {
        let args = Cli::try_parse_from([
            "gh-activity",
            "octocat",
            "-w",
            "2",
            "--queue-capacity",
            "3",
            "--prefix",
            "* ",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(args.color, ColorChoice::Never);

        let config = config(&args);
        assert_eq!(config.worker_count, 2);
        assert_eq!(config.work_queue_capacity, 3);
        assert_eq!(config.prefix, "* ");
        assert!(config.palette().is_none());
    }
}
