use tokio::sync::mpsc::Receiver;

use crate::{FormattedLine, Result, Sink};

/// Drains the result queue into a [`Sink`], one line at a time.
pub(crate) struct Collector<'a, S: Sink + ?Sized> {
    receiver: Receiver<FormattedLine>,
    sink: &'a mut S,
    prefix: &'a str,
}

impl<'a, S: Sink + ?Sized> Collector<'a, S> {
    pub fn new(receiver: Receiver<FormattedLine>, sink: &'a mut S, prefix: &'a str) -> Self {
        Self {
            receiver,
            sink,
            prefix,
        }
    }

    /// Forward lines in arrival order until the queue is closed and empty.
    /// Returns the number of lines written.
    pub async fn run(self) -> Result<usize> {
        let Collector {
            mut receiver,
            sink,
            prefix,
        } = self;

        let mut emitted = 0;
        while let Some(line) = receiver.recv().await {
            sink.write_line(prefix, &line)?;
            emitted += 1;
        }
        sink.flush()?;
        Ok(emitted)
    }
}
