use flume::Receiver;
use tokio::{sync::mpsc::Sender, task::JoinSet};
use tracing::{debug, error};

use super::Worker;
use crate::{Error, Event, FormattedLine, Result, WorkerReport};

/// Owns the worker tasks and the original result-queue sender.
///
/// Workers get clones of the sender. [`ShutdownCoordinator::run`] waits for
/// every worker to exit before dropping the original, which is what closes
/// the result queue and lets the collector finish.
pub(crate) struct ShutdownCoordinator {
    workers: JoinSet<Result<WorkerReport>>,
    sender: Sender<FormattedLine>,
}

impl ShutdownCoordinator {
    pub fn new(sender: Sender<FormattedLine>) -> Self {
        Self {
            workers: JoinSet::new(),
            sender,
        }
    }

    pub fn spawn_worker(&mut self, id: usize, receiver: Receiver<Event>) {
        let worker = Worker {
            id,
            receiver,
            sender: self.sender.clone(),
        };
        self.workers.spawn(worker.run());
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Join all workers, then close the result queue.
    ///
    /// A failing worker doesn't stop the join: the remaining workers are still
    /// awaited and the first failure is returned once the queue is closed.
    pub async fn run(self) -> Result<Vec<WorkerReport>> {
        let ShutdownCoordinator {
            mut workers,
            sender,
        } = self;

        let mut reports = Vec::with_capacity(workers.len());
        let mut failure: Option<Error> = None;
        while let Some(res) = workers.join_next().await {
            match res {
                Ok(Ok(report)) => reports.push(report),
                Ok(Err(e)) => {
                    error!(error = %e, "Worker failed");
                    failure.get_or_insert(e);
                }
                Err(e) => {
                    error!(error = %e, "Worker task failed to join");
                    failure.get_or_insert(e.into());
                }
            }
        }

        drop(sender);
        debug!(workers = reports.len(), "All workers finished, result queue closed");

        match failure {
            Some(e) => Err(e),
            None => {
                reports.sort_by_key(|r| r.worker_id);
                Ok(reports)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_result_queue_closes_after_last_worker() {
        let (work_tx, work_rx) = flume::bounded(4);
        let (result_tx, mut result_rx) = mpsc::channel(64);
        let mut coordinator = ShutdownCoordinator::new(result_tx);
        for id in 0..3 {
            coordinator.spawn_worker(id, work_rx.clone());
        }
        drop(work_rx);
        assert_eq!(coordinator.worker_count(), 3);

        let feeder = tokio::spawn(async move {
            for i in 0..30 {
                work_tx.send_async(Event::push("a/b", i + 1)).await.unwrap();
            }
        });

        let reports = coordinator.run().await.unwrap();
        feeder.await.unwrap();

        // Every line produced by the workers is already buffered once the queue closes.
        let mut received = 0;
        while result_rx.recv().await.is_some() {
            received += 1;
        }
        assert_eq!(received, 30);
        assert_eq!(reports.iter().map(|r| r.produced).sum::<usize>(), 30);
        assert_eq!(
            reports.iter().map(|r| r.worker_id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[tokio::test]
    async fn test_no_workers_closes_immediately() {
        let (result_tx, mut result_rx) = mpsc::channel(1);
        let coordinator = ShutdownCoordinator::new(result_tx);
        assert!(coordinator.run().await.unwrap().is_empty());
        assert!(result_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_reports_worker_failure_after_closing() {
        let (work_tx, work_rx) = flume::bounded(2);
        let (result_tx, result_rx) = mpsc::channel(1);
        drop(result_rx);
        let mut coordinator = ShutdownCoordinator::new(result_tx);
        coordinator.spawn_worker(0, work_rx);
        work_tx.send(Event::fork("a/b")).unwrap();
        drop(work_tx);

        assert!(matches!(
            coordinator.run().await,
            Err(Error::SendError("result"))
        ));
    }
}
