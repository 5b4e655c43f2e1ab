//! Top-level run: collect URLs, download them in order, print the summary.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Result;
use mediafetch_core::{BatchRunner, Downloader, DownloaderConfig};
use tracing::{debug, info};

use super::exit_handler::{ProcessExit, determine_exit_outcome};
use super::input_processor;
use super::output::{self, ConsoleReporter};
use crate::cli::Args;

pub(crate) async fn run_mediafetch(args: Args) -> Result<ProcessExit> {
    let urls = gather_urls(&args)?;

    let mut stdout = io::stdout();
    if urls.is_empty() {
        writeln!(stdout, "No URLs entered - exiting")?;
        return Ok(ProcessExit::Success);
    }

    if !args.quiet {
        output::write_url_list(&mut stdout, &urls)?;
        writeln!(stdout, "\nStarting download of {} files...\n", urls.len())?;
    }

    let config = DownloaderConfig::default().with_timeouts(
        Duration::from_secs(args.head_timeout),
        Duration::from_secs(args.get_timeout),
    );
    debug!(?config, "downloader configuration");
    let runner = BatchRunner::new(Downloader::new(config)?);

    let mut reporter = ConsoleReporter::new(io::stdout(), args.quiet, args.show_progress());
    let summary = runner.run(&urls, &args.output_dir, &mut reporter).await;

    writeln!(
        stdout,
        "\n{}",
        output::render_summary(&summary, &args.output_dir)
    )?;

    info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "mediafetch finished"
    );
    Ok(determine_exit_outcome(summary.succeeded(), summary.failed()))
}

/// Positional URLs win; otherwise stdin is read, prompting when it is a terminal.
fn gather_urls(args: &Args) -> Result<Vec<String>> {
    let mut stderr = io::stderr();
    if !args.urls.is_empty() {
        return Ok(input_processor::filter_args(&args.urls, &mut stderr)?);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}\n", input_processor::PROMPT_BANNER)?;
        Ok(input_processor::collect_urls(stdin.lock(), &mut stdout, true)?)
    } else {
        Ok(input_processor::collect_urls(stdin.lock(), &mut stderr, false)?)
    }
}
