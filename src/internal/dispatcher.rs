use flume::Sender;
use tracing::debug;

use crate::{Event, Result};

/// Single producer feeding the work queue.
///
/// Owns the only sender of the work queue, so the queue closes when
/// [`Dispatcher::run`] returns, after the last push has completed.
pub(crate) struct Dispatcher {
    sender: Sender<Event>,
}

impl Dispatcher {
    pub fn new(sender: Sender<Event>) -> Self {
        Self { sender }
    }

    /// Push every event in order, waiting whenever the queue is full, then
    /// close the queue. Returns the number of events dispatched.
    pub async fn run<I>(self, events: I) -> Result<usize>
    where
        I: IntoIterator<Item = Event>,
    {
        let Dispatcher { sender } = self;
        let mut dispatched = 0;
        for event in events {
            sender.send_async(event).await?;
            dispatched += 1;
        }
        drop(sender);
        debug!(dispatched, "Work queue closed");
        Ok(dispatched)
    }
}
