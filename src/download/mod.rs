//! HTTP download pipeline for media files.
//!
//! This module turns a URL into a file on disk: a HEAD probe resolves redirects
//! and metadata, a filename is derived and made unique within the target
//! directory, and the body is streamed to disk and verified against the
//! declared Content-Length.
//!
//! # Features
//!
//! - Streaming downloads in fixed 1 MiB chunks with pluggable progress reporting
//! - Filename from Content-Disposition, URL path, and Content-Type
//! - Collision avoidance with `_1`, `_2`, ... suffixes
//! - Size verification after the stream ends
//! - Structured error types converted to per-URL outcomes
//!
//! # Example
//!
//! ```no_run
//! use mediafetch_core::download::{Downloader, DownloaderConfig, NoProgress};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = Downloader::new(DownloaderConfig::default())?;
//! let file = downloader
//!     .download("https://example.com/clip.mp4", Path::new("./videos"), &mut NoProgress)
//!     .await?;
//! println!("Downloaded: {}", file.save_path);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod constants;
mod error;
mod filename;
mod outcome;
mod probe;
mod progress;
mod save_path;

pub use client::{DownloadedFile, Downloader};
pub use config::DownloaderConfig;
pub use error::{DownloadError, FailureKind};
pub use filename::{FORBIDDEN_CHARS, resolve_filename};
pub use outcome::DownloadOutcome;
pub use probe::ProbeResult;
pub use progress::{NoProgress, ProgressSink};
pub use save_path::{SavePath, unique_path};
