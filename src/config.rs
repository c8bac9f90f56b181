use crate::{Error, Palette, Result};

/// Pipeline configuration.
///
/// Built once and handed to [`Pipeline::new`](crate::Pipeline::new). Use the
/// builder methods to customize, or [`Default`] for the stock setup.
///
/// # Examples
///
/// ```rust
/// use gh_activity::Config;
///
/// let config = Config::default()
///     .with_worker_count(8)          // More workers for large feeds
///     .with_prefix("* ")
///     .with_color(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of concurrent workers formatting events.
    /// Default: 4
    pub worker_count: usize,

    /// Capacity of the work queue. The dispatcher waits when it is full.
    /// Default: 16
    pub work_queue_capacity: usize,

    /// Capacity of the result queue. `None` sizes it to the batch, so
    /// workers never wait on the collector.
    /// Default: None
    pub result_queue_capacity: Option<usize>,

    /// Text printed in front of every line.
    /// Default: "- "
    pub prefix: String,

    /// Colors for highlighted spans.
    pub palette: Palette,

    /// Whether lines are painted with the palette.
    /// Default: true
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worker_count: 4,
            work_queue_capacity: 16,
            result_queue_capacity: None,
            prefix: "- ".to_string(),
            palette: Palette::default(),
            color: true,
        }
    }
}

impl Config {
    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    pub fn with_work_queue_capacity(mut self, capacity: usize) -> Self {
        self.work_queue_capacity = capacity;
        self
    }

    /// Bound the result queue. Smaller values make workers wait for the
    /// collector (backpressure) instead of buffering the whole batch.
    pub fn with_result_queue_capacity(mut self, capacity: usize) -> Self {
        self.result_queue_capacity = Some(capacity);
        self
    }

    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// The palette to paint with, or `None` when colors are disabled.
    pub fn palette(&self) -> Option<Palette> {
        self.color.then_some(self.palette)
    }

    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(Error::InvalidConfig("worker count must be at least 1".into()));
        }
        if self.work_queue_capacity == 0 {
            return Err(Error::InvalidConfig(
                "work queue capacity must be at least 1".into(),
            ));
        }
        if self.result_queue_capacity == Some(0) {
            return Err(Error::InvalidConfig(
                "result queue capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
