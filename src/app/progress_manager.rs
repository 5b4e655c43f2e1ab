//! Progress UI (byte bars) for transfers.

use indicatif::{ProgressBar, ProgressStyle};
use mediafetch_core::ProgressSink;

/// Longest label shown next to a bar.
const LABEL_WIDTH: usize = 40;

/// Draws an indicatif bar per transfer on stderr.
///
/// With a known total the bar shows a percentage and ETA; otherwise a spinner
/// with a running byte count. When disabled every call is a no-op.
#[derive(Debug)]
pub(crate) struct ConsoleProgress {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }
}

impl ProgressSink for ConsoleProgress {
    fn start(&mut self, label: &str, total: Option<u64>) {
        if !self.enabled {
            return;
        }
        let bar = match total {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::with_template(
                        "{msg} {percent:>3}%|{bar:30}| {bytes}/{total_bytes} [{elapsed_precise}<{eta_precise}, {bytes_per_sec}]",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::with_template(
                        "{spinner} {msg} {bytes} [{elapsed_precise}, {bytes_per_sec}]",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                bar
            }
        };
        bar.set_message(truncate_label(label, LABEL_WIDTH));
        self.bar = Some(bar);
    }

    fn advance(&mut self, bytes: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(bytes);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

/// First `width` characters of `label`.
pub(crate) fn truncate_label(label: &str, width: usize) -> String {
    label.chars().take(width).collect()
}
