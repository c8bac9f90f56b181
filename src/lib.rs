//! gh-activity - concurrent GitHub activity feed formatter
//!
//! Fetches a user's public events, fans them out to a fixed pool of workers
//! which classify and format each one, and fans the resulting lines back in
//! for sequential display.
//!
//! ```rust,no_run
//! use gh_activity::{Config, EventSource, GitHubSource, Pipeline, WriterSink};
//!
//! # async fn demo() -> gh_activity::Result {
//! let config = Config::default().with_worker_count(8);
//! let events = GitHubSource::new(gh_activity::DEFAULT_API_URL)?
//!     .fetch("octocat")
//!     .await?;
//! let mut sink = WriterSink::stdout(config.palette());
//! Pipeline::new(config)?.run(events, &mut sink).await?;
//! # Ok(())
//! # }
//! ```

extern crate self as gh_activity;

mod config;
mod error;
mod event;
mod format;
mod label;
mod pipeline;
mod report;
mod sink;
mod source;
mod style;

mod internal;

pub use config::Config;
pub use error::Error;
pub use event::{Event, EventKind};
pub use format::{FormattedLine, Span, format_event};
pub use label::Label;
pub use pipeline::Pipeline;
pub use report::{RunReport, WorkerReport};
pub use sink::{MemorySink, Sink, WriterSink};
pub use source::{DEFAULT_API_URL, EventSource, GitHubSource, StaticSource, check_status, decode_events};
pub use style::{Palette, Tone};

pub use gh_activity_macros::Label;

pub type Result<T = ()> = std::result::Result<T, Error>;
