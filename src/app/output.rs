//! CLI output formatting: per-URL lines and the final summary.

use std::io::{self, Write};
use std::path::Path;

use mediafetch_core::{BatchReporter, BatchSummary, DownloadOutcome, ProgressSink};

use super::progress_manager::ConsoleProgress;

/// Prints each URL as it starts and its outcome as soon as it is known.
pub(crate) struct ConsoleReporter<W: Write> {
    out: W,
    quiet: bool,
    progress: ConsoleProgress,
}

impl<W: Write> ConsoleReporter<W> {
    pub(crate) fn new(out: W, quiet: bool, show_progress: bool) -> Self {
        Self {
            out,
            quiet,
            progress: ConsoleProgress::new(show_progress),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

// Console write failures are not actionable mid-batch, so they are ignored.
impl<W: Write> BatchReporter for ConsoleReporter<W> {
    fn url_started(&mut self, index: usize, total: usize, url: &str) {
        if self.quiet {
            return;
        }
        let _ = writeln!(self.out, "Downloading {index}/{total}");
        let _ = writeln!(self.out, "   URL: {url}");
    }

    fn url_finished(&mut self, _index: usize, _total: usize, outcome: &DownloadOutcome) {
        if self.quiet {
            return;
        }
        let _ = match outcome {
            DownloadOutcome::Success { path, .. } => {
                writeln!(self.out, "Success: {}\n", path.display())
            }
            DownloadOutcome::Failure { url, reason, .. } => {
                writeln!(self.out, "Failed: {url}\n   Reason: {reason}\n")
            }
        };
    }

    fn progress(&mut self) -> &mut dyn ProgressSink {
        &mut self.progress
    }
}

/// Writes the numbered list of URLs about to be downloaded.
pub(crate) fn write_url_list<W: Write>(out: &mut W, urls: &[String]) -> io::Result<()> {
    writeln!(out, "URLs to download:")?;
    for (index, url) in urls.iter().enumerate() {
        writeln!(out, "{:2}. {url}", index + 1)?;
    }
    Ok(())
}

/// Renders the final batch summary.
pub(crate) fn render_summary(summary: &BatchSummary, directory: &Path) -> String {
    let rule = "--------------------------";
    let mut lines = vec![
        "Download Summary".to_string(),
        rule.to_string(),
        format!("Total URLs: {}", summary.total()),
        format!("Successful: {}", summary.succeeded()),
        format!("Failed:     {}", summary.failed()),
        rule.to_string(),
    ];

    if summary.succeeded() > 0 {
        lines.push(String::new());
        lines.push("Downloaded files:".to_string());
        for outcome in summary.successes() {
            if let DownloadOutcome::Success {
                url,
                path,
                bytes_written,
            } = outcome
            {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                lines.push(format!("- {name} ({bytes_written} bytes)"));
                lines.push(format!("  Source: {url}"));
                lines.push(format!("  Path: {}", path.display()));
            }
        }
    }

    if summary.failed() > 0 {
        lines.push(String::new());
        lines.push("Failed downloads:".to_string());
        for outcome in summary.failures() {
            if let DownloadOutcome::Failure { url, reason, .. } = outcome {
                lines.push(format!("- {url}"));
                lines.push(format!("  Reason: {reason}"));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("All files are saved in: {}", directory.display()));
    lines.join("\n")
}
