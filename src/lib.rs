//! Mediafetch Core Library
//!
//! This library provides the core functionality for the mediafetch tool,
//! which downloads a list of remote media files into a flat directory with
//! safe, collision-free filenames.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`download`] - Filename resolution, collision avoidance, streaming HTTP downloads
//! - [`batch`] - Sequential batch runner and summary
//! - [`user_agent`] - Identifying headers sent with every request

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod download;
pub mod user_agent;

// Re-export commonly used types
pub use batch::{BatchReporter, BatchRunner, BatchSummary, SilentReporter};
pub use download::{
    DownloadError, DownloadOutcome, DownloadedFile, Downloader, DownloaderConfig, FailureKind,
    NoProgress, ProbeResult, ProgressSink, SavePath, resolve_filename, unique_path,
};
