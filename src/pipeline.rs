use tokio::sync::mpsc;
use tracing::info;

use crate::internal::{Collector, Dispatcher, ShutdownCoordinator};
use crate::{Config, Event, Result, RunReport, Sink};

/// Fan-out/fan-in pipeline formatting a batch of events.
///
/// - The dispatcher pushes events, in order, into a bounded work queue and
///   closes it after the last push.
/// - `worker_count` workers pull from the work queue, format each event and
///   push non-empty lines into the result queue.
/// - The shutdown coordinator joins the workers and only then closes the
///   result queue.
/// - The collector streams lines to the sink until the result queue closes.
///
/// Lines reach the sink in the order workers finish them, not in input order.
///
/// # Examples
///
/// ```rust
/// use gh_activity::{Config, Event, MemorySink, Pipeline};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> gh_activity::Result {
/// let pipeline = Pipeline::new(Config::default().with_worker_count(2))?;
/// let mut sink = MemorySink::new();
/// let report = pipeline
///     .run(vec![Event::watch("foo/bar"), Event::push("foo/bar", 0)], &mut sink)
///     .await?;
/// assert_eq!(sink.lines(), ["- Starred foo/bar"]);
/// assert_eq!(report.skipped(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a pipeline; fails if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Format `events` with the worker pool and write every line to `sink`.
    ///
    /// Runs to completion: returns once every worker has exited, the result
    /// queue has closed and the collector has written the last line.
    pub async fn run<S>(&self, events: Vec<Event>, sink: &mut S) -> Result<RunReport>
    where
        S: Sink + ?Sized,
    {
        let result_capacity = self
            .config
            .result_queue_capacity
            .unwrap_or(events.len())
            .max(1);
        let (work_tx, work_rx) = flume::bounded(self.config.work_queue_capacity);
        let (result_tx, result_rx) = mpsc::channel(result_capacity);

        let mut coordinator = ShutdownCoordinator::new(result_tx);
        for id in 0..self.config.worker_count {
            coordinator.spawn_worker(id, work_rx.clone());
        }
        // Only workers hold receivers, so the dispatcher fails instead of
        // waiting forever if they all die.
        drop(work_rx);

        info!(
            events = events.len(),
            workers = coordinator.worker_count(),
            "Starting pipeline"
        );

        let dispatcher = Dispatcher::new(work_tx);
        let collector = Collector::new(result_rx, sink, &self.config.prefix);

        let (dispatched, workers, emitted) =
            tokio::join!(dispatcher.run(events), coordinator.run(), collector.run());

        // The sink failing makes workers and dispatcher fail too, so report it first.
        let emitted = emitted?;
        let workers = workers?;
        let dispatched = dispatched?;

        let report = RunReport {
            dispatched,
            emitted,
            workers,
        };
        info!(
            dispatched = report.dispatched,
            emitted = report.emitted,
            skipped = report.skipped(),
            "Pipeline finished"
        );
        Ok(report)
    }
}
