//! Progress sink that records every call.

use mediafetch_core::ProgressSink;

#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub started: Vec<(String, Option<u64>)>,
    pub advanced: Vec<u64>,
    pub finished: usize,
}

impl RecordingProgress {
    /// Sum of all reported bytes.
    pub fn total_advanced(&self) -> u64 {
        self.advanced.iter().sum()
    }
}

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
