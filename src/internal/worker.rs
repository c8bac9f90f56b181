use flume::Receiver;
use tokio::sync::mpsc::Sender;
use tracing::{debug, trace};

use crate::{Event, FormattedLine, Label, Result, WorkerReport, format_event};

pub(crate) struct Worker {
    pub(crate) id: usize,
    pub(crate) receiver: Receiver<Event>,
    pub(crate) sender: Sender<FormattedLine>,
}

impl Worker {
    /// Format events until the work queue is closed and drained.
    ///
    /// Lines are forwarded to the result queue; events without output are
    /// only counted. The worker's result sender is dropped on return.
    pub async fn run(self) -> Result<WorkerReport> {
        let mut report = WorkerReport::new(self.id);
        debug!(worker = self.id, "Worker started");

        while let Ok(event) = self.receiver.recv_async().await {
            report.processed += 1;
            match format_event(&event) {
                Some(line) => {
                    self.sender.send(line).await?;
                    report.produced += 1;
                }
                None => trace!(
                    worker = self.id,
                    kind = %event.kind().label(),
                    repo = event.repo_name(),
                    "Event has no output"
                ),
            }
        }

        debug!(
            worker = self.id,
            processed = report.processed,
            produced = report.produced,
            "Worker finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_drains_queue_then_exits() {
        let (work_tx, work_rx) = flume::bounded(8);
        let (result_tx, mut result_rx) = mpsc::channel(8);
        for event in [
            Event::watch("a/b"),
            Event::push("a/b", 0),
            Event::other("a/b"),
            Event::issues("a/b", "closed"),
        ] {
            work_tx.send(event).unwrap();
        }
        drop(work_tx);

        let worker = Worker {
            id: 7,
            receiver: work_rx,
            sender: result_tx,
        };
        let report = worker.run().await.unwrap();
        assert_eq!(
            report,
            WorkerReport {
                worker_id: 7,
                processed: 4,
                produced: 2,
            }
        );

        let mut lines = Vec::new();
        while let Some(line) = result_rx.recv().await {
            lines.push(line.to_string());
        }
        assert_eq!(lines, ["Starred a/b", "Closed an issue in a/b"]);
    }

    #[tokio::test]
    async fn test_fails_when_results_are_dropped() {
        let (work_tx, work_rx) = flume::bounded(1);
        let (result_tx, result_rx) = mpsc::channel(1);
        drop(result_rx);
        work_tx.send(Event::fork("a/b")).unwrap();
        drop(work_tx);

        let worker = Worker {
            id: 0,
            receiver: work_rx,
            sender: result_tx,
        };
        assert!(worker.run().await.is_err());
    }
}
