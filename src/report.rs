/// What a single worker did before it exited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Events taken off the work queue.
    pub processed: usize,
    /// Lines pushed onto the result queue.
    pub produced: usize,
}

impl WorkerReport {
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Default::default()
        }
    }
}

/// Outcome of one [`Pipeline::run`](crate::Pipeline::run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Events the dispatcher pushed into the work queue.
    pub dispatched: usize,
    /// Lines the collector handed to the sink.
    pub emitted: usize,
    /// Per-worker reports, ordered by worker id.
    pub workers: Vec<WorkerReport>,
}

impl RunReport {
    pub fn processed(&self) -> usize {
        self.workers.iter().map(|w| w.processed).sum()
    }

    pub fn produced(&self) -> usize {
        self.workers.iter().map(|w| w.produced).sum()
    }

    /// Events that were classified as having no output.
    pub fn skipped(&self) -> usize {
        self.processed().saturating_sub(self.produced())
    }
}
