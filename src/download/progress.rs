//! Progress reporting seam for streaming transfers.
//!
//! The downloader knows nothing about rendering; it reports to a
//! [`ProgressSink`] and the caller decides what to draw.

/// Receives per-chunk progress for one transfer at a time.
pub trait ProgressSink {
    /// A transfer is starting. `total` is `None` when the size is unknown.
    fn start(&mut self, label: &str, total: Option<u64>);

    /// `bytes` more bytes were written to disk.
    fn advance(&mut self, bytes: u64);

    /// The transfer ended, successfully or not.
    fn finish(&mut self);
}

/// Sink that discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _label: &str, _total: Option<u64>) {}

    fn advance(&mut self, _bytes: u64) {}

    fn finish(&mut self) {}
}

/// Sink that records every call, for assertions.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingProgress {
    /// Labels and totals passed to `start`, in order.
    pub(crate) started: Vec<(String, Option<u64>)>,
    /// Byte counts passed to `advance`, in order.
    pub(crate) advanced: Vec<u64>,
    /// Number of `finish` calls.
    pub(crate) finished: usize,
}

#[cfg(test)]
impl ProgressSink for RecordingProgress {
    fn start(&mut self, label: &str, total: Option<u64>) {
        self.started.push((label.to_string(), total));
    }

    fn advance(&mut self, bytes: u64) {
        self.advanced.push(bytes);
    }

    fn finish(&mut self) {
        self.finished += 1;
    }
}
