//! Sequential batch runner over a list of URLs.
//!
//! Each URL is fetched to completion, success or failure, before the next one
//! starts. A failed URL never aborts the batch.

use std::path::Path;

use tracing::{info, instrument};

use crate::download::{DownloadOutcome, Downloader, NoProgress, ProgressSink};

/// Receives per-URL notifications while a batch runs.
pub trait BatchReporter {
    /// URL `index` (1-based) of `total` is about to be fetched.
    fn url_started(&mut self, _index: usize, _total: usize, _url: &str) {}

    /// URL `index` (1-based) of `total` finished with `outcome`.
    fn url_finished(&mut self, _index: usize, _total: usize, _outcome: &DownloadOutcome) {}

    /// Progress sink for the transfer currently running.
    fn progress(&mut self) -> &mut dyn ProgressSink;
}

/// Reporter that ignores everything.
#[derive(Debug, Default)]
pub struct SilentReporter {
    sink: NoProgress,
}

impl BatchReporter for SilentReporter {
    fn progress(&mut self) -> &mut dyn ProgressSink {
        &mut self.sink
    }
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    outcomes: Vec<DownloadOutcome>,
}

impl BatchSummary {
    /// All outcomes, in the order the URLs were given.
    #[must_use]
    pub fn outcomes(&self) -> &[DownloadOutcome] {
        &self.outcomes
    }

    /// Successful outcomes, in input order.
    pub fn successes(&self) -> impl Iterator<Item = &DownloadOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Failed outcomes, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &DownloadOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Number of successful downloads.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.successes().count()
    }

    /// Number of failed downloads.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// Number of URLs processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    fn push(&mut self, outcome: DownloadOutcome) {
        self.outcomes.push(outcome);
    }
}

impl FromIterator<DownloadOutcome> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = DownloadOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

/// Drives a [`Downloader`] over a list of URLs, one at a time.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    downloader: Downloader,
}

impl BatchRunner {
    /// Creates a runner around an existing downloader.
    #[must_use]
    pub fn new(downloader: Downloader) -> Self {
        Self { downloader }
    }

    /// Fetches every URL into `directory` and returns the outcomes in input order.
    #[instrument(skip(self, urls, directory, reporter), fields(urls = urls.len(), dir = %directory.display()))]
    pub async fn run<S: AsRef<str>>(
        &self,
        urls: &[S],
        directory: &Path,
        reporter: &mut dyn BatchReporter,
    ) -> BatchSummary {
        let total = urls.len();
        let mut summary = BatchSummary::default();

        for (position, url) in urls.iter().enumerate() {
            let index = position + 1;
            let url = url.as_ref();
            reporter.url_started(index, total, url);

            let outcome = self
                .downloader
                .fetch(url, directory, reporter.progress())
                .await;

            reporter.url_finished(index, total, &outcome);
            summary.push(outcome);
        }

        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            total = summary.total(),
            "batch complete"
        );
        summary
    }
}
