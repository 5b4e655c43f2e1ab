//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use mediafetch_core::download::constants::{GET_TIMEOUT_SECS, HEAD_TIMEOUT_SECS};

/// Default target directory for downloaded files.
pub const DEFAULT_OUTPUT_DIR: &str = "videos";

/// Batch download remote media files.
///
/// URLs are taken from the arguments, from piped stdin (one per line), or
/// prompted for interactively. Each file is saved under a name derived from
/// the server's headers, never overwriting an existing file.
#[derive(Parser, Debug)]
#[command(name = "mediafetch")]
#[command(author, version, about)]
pub struct Args {
    /// URLs to download (http:// or https://)
    pub urls: Vec<String>,

    /// Directory to save files into (created if missing)
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress bars and per-URL output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Timeout in seconds for the HEAD probe (1-600)
    #[arg(long, default_value_t = HEAD_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub head_timeout: u64,

    /// Connect and per-read timeout in seconds for the transfer (1-600)
    #[arg(long, default_value_t = GET_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub get_timeout: u64,
}

impl Args {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether progress bars should be drawn.
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["mediafetch"]).unwrap();
        assert!(args.urls.is_empty());
        assert_eq!(args.output_dir, PathBuf::from("videos"));
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.head_timeout, 10);
        assert_eq!(args.get_timeout, 20);
        assert!(args.show_progress());
        assert_eq!(args.default_log_level(), "warn");
    }

    #[test]
    fn test_cli_positional_urls_keep_order() {
        let args = Args::try_parse_from([
            "mediafetch",
            "https://a.example/1.mp4",
            "https://b.example/2.mp4",
        ])
        .unwrap();
        assert_eq!(
            args.urls,
            vec!["https://a.example/1.mp4", "https://b.example/2.mp4"]
        );
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["mediafetch", "-v"]).unwrap();
        assert_eq!(args.default_log_level(), "info");

        let args = Args::try_parse_from(["mediafetch", "-vv"]).unwrap();
        assert_eq!(args.default_log_level(), "debug");

        let args = Args::try_parse_from(["mediafetch", "-vvvv"]).unwrap();
        assert_eq!(args.default_log_level(), "trace");
    }

    #[test]
    fn test_cli_quiet_wins_over_verbose() {
        let args = Args::try_parse_from(["mediafetch", "-q", "-vv"]).unwrap();
        assert_eq!(args.default_log_level(), "error");
        assert!(!args.show_progress());
    }

    #[test]
    fn test_cli_no_progress_flag() {
        let args = Args::try_parse_from(["mediafetch", "--no-progress"]).unwrap();
        assert!(!args.show_progress());
    }

    #[test]
    fn test_cli_output_dir_short_and_long() {
        let args = Args::try_parse_from(["mediafetch", "-o", "/tmp/x"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("/tmp/x"));

        let args = Args::try_parse_from(["mediafetch", "--output-dir", "clips"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("clips"));
    }

    #[test]
    fn test_cli_timeout_out_of_range_rejected() {
        assert!(Args::try_parse_from(["mediafetch", "--head-timeout", "0"]).is_err());
        assert!(Args::try_parse_from(["mediafetch", "--get-timeout", "601"]).is_err());
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["mediafetch", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["mediafetch", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
