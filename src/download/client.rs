//! HTTP downloader: HEAD probe, streaming GET, and size verification.
//!
//! This module provides the `Downloader` struct which resolves a safe save
//! path from the probe, streams the body to disk in fixed-size chunks, and
//! reports every failure as a [`DownloadOutcome::Failure`] instead of an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Client, Response};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::config::DownloaderConfig;
use super::error::DownloadError;
use super::filename::resolve_filename;
use super::outcome::DownloadOutcome;
use super::probe::ProbeResult;
use super::progress::ProgressSink;
use super::save_path::{SavePath, unique_path};
use crate::user_agent;

/// Sequential media downloader.
///
/// Create once and reuse for every URL of a batch to share the connection pool.
///
/// # Example
///
/// ```no_run
/// use mediafetch_core::download::{Downloader, DownloaderConfig, NoProgress};
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let downloader = Downloader::new(DownloaderConfig::default())?;
/// let outcome = downloader
///     .fetch("https://example.com/clip.mp4", Path::new("./videos"), &mut NoProgress)
///     .await;
/// println!("{outcome:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    config: DownloaderConfig,
}

/// A completed and verified transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Where the file was saved.
    pub save_path: SavePath,
    /// Bytes written to disk.
    pub bytes_written: u64,
    /// Declared Content-Length, when the server sent a nonzero one.
    pub expected_bytes: Option<u64>,
}

impl Downloader {
    /// Creates a downloader from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::ClientBuild` if the header values are not valid
    /// HTTP header values, the chunk size is zero, or the TLS backend fails to
    /// initialize.
    pub fn new(config: DownloaderConfig) -> Result<Self, DownloadError> {
        if config.chunk_size == 0 {
            return Err(DownloadError::client_build("chunk size must be greater than zero"));
        }

        let headers = user_agent::identifying_headers(&config.user_agent, &config.referer)
            .map_err(|e| DownloadError::client_build(e.to_string()))?;

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.get_timeout)
            .read_timeout(config.get_timeout)
            .gzip(true)
            .build()
            .map_err(|e| DownloadError::client_build(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Downloads `url` into `directory`, never returning an error.
    ///
    /// Every network, HTTP status, filesystem, or verification error is logged
    /// and converted into [`DownloadOutcome::Failure`].
    #[instrument(skip(self, directory, progress), fields(url = %url))]
    pub async fn fetch(
        &self,
        url: &str,
        directory: &Path,
        progress: &mut dyn ProgressSink,
    ) -> DownloadOutcome {
        match self.download(url, directory, progress).await {
            Ok(file) => DownloadOutcome::Success {
                url: url.to_string(),
                path: file.save_path.path(),
                bytes_written: file.bytes_written,
            },
            Err(error) => {
                warn!(error = %error, "download failed");
                DownloadOutcome::failure(url, &error)
            }
        }
    }

    /// Downloads `url` into `directory`, returning the typed error on failure.
    ///
    /// Steps: HEAD probe, filename and save path resolution, streaming GET,
    /// size verification. No file is created before the GET succeeds; a
    /// partially written file is left on disk when the transfer fails.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid or not http/https
    /// - HEAD or GET fails (network error, timeout, non-2xx status)
    /// - The directory or file cannot be created or written
    /// - The size on disk differs from the declared Content-Length
    #[instrument(skip(self, directory, progress), fields(url = %url))]
    pub async fn download(
        &self,
        url: &str,
        directory: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<DownloadedFile, DownloadError> {
        validate_url(url)?;

        let probe = self.probe(url).await?;
        let filename = resolve_filename(&probe);
        let save_path = unique_path(directory, &filename)?;
        debug!(
            final_url = %probe.final_url,
            filename = %filename,
            path = %save_path,
            "resolved save path"
        );

        let response = self.get(&probe.final_url).await?;
        let expected_bytes = declared_length(&response);

        let (save_path, file) = open_exclusive(save_path).await?;
        let path = save_path.path();

        progress.start(&save_path.filename, expected_bytes);
        let streamed = stream_to_file(
            file,
            response,
            &probe.final_url,
            &path,
            self.config.chunk_size,
            progress,
        )
        .await;
        progress.finish();

        let actual_bytes = tokio::fs::metadata(&path)
            .await
            .map_err(|e| DownloadError::io(path.clone(), e))?
            .len();

        let bytes_written = match streamed {
            Ok(bytes) => bytes,
            Err(error) => {
                // A body cut short by the peer is an incomplete download, not a network fault.
                if let (DownloadError::Network { .. }, Some(expected)) = (&error, expected_bytes)
                    && expected != actual_bytes
                {
                    warn!(error = %error, bytes = actual_bytes, "body stream ended early");
                    return Err(DownloadError::size_mismatch(path, expected, actual_bytes));
                }
                return Err(error);
            }
        };

        if let Some(expected) = expected_bytes
            && expected != actual_bytes
        {
            return Err(DownloadError::size_mismatch(path, expected, actual_bytes));
        }

        info!(path = %path.display(), bytes = bytes_written, "download complete");

        Ok(DownloadedFile {
            save_path,
            bytes_written,
            expected_bytes,
        })
    }

    /// Sends the HEAD probe, following redirects.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` on network failure, timeout, or non-2xx status.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn probe(&self, url: &str) -> Result<ProbeResult, DownloadError> {
        let response = self
            .client
            .head(url)
            .timeout(self.config.head_timeout)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;
        let response = ensure_success(url, response)?;

        debug!(final_url = %response.url(), status = %response.status(), "probe complete");
        Ok(ProbeResult::from_headers(
            response.url().as_str(),
            response.headers(),
        ))
    }

    async fn get(&self, url: &str) -> Result<Response, DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;
        ensure_success(url, response)
    }
}

fn validate_url(url: &str) -> Result<(), DownloadError> {
    let parsed = Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;
    if matches!(parsed.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(DownloadError::invalid_url(url))
    }
}

fn ensure_success(url: &str, response: Response) -> Result<Response, DownloadError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(DownloadError::http_status(url, status))
    }
}

/// Content-Length of the GET response; zero or absent means unknown.
fn declared_length(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|len| *len > 0)
}

/// Upper bound on re-resolving a save path that keeps getting taken.
const MAX_CREATE_ATTEMPTS: usize = 16;

/// Creates the file with `create_new`, re-resolving the name if another
/// writer took it after `unique_path` checked.
async fn open_exclusive(mut save_path: SavePath) -> Result<(SavePath, File), DownloadError> {
    let requested = save_path.filename.clone();
    for _ in 0..MAX_CREATE_ATTEMPTS {
        let path = save_path.path();
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => return Ok((save_path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "save path taken, resolving again");
                save_path = unique_path(&save_path.directory, &requested)?;
            }
            Err(e) => return Err(DownloadError::io(path, e)),
        }
    }
    Err(DownloadError::io(
        save_path.path(),
        std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free name after {MAX_CREATE_ATTEMPTS} attempts"),
        ),
    ))
}

/// Streams the response body to `file`, returning bytes written.
///
/// Takes ownership of the file so it is flushed and closed on every exit
/// path, including a failed chunk read or write.
async fn stream_to_file(
    mut file: File,
    response: Response,
    url: &str,
    path: &Path,
    chunk_size: usize,
    progress: &mut dyn ProgressSink,
) -> Result<u64, DownloadError> {
    let written = write_chunks(&mut file, response, url, path, chunk_size, progress).await;
    let flushed = file
        .flush()
        .await
        .map_err(|e| DownloadError::io(path.to_path_buf(), e));
    drop(file);

    let written = written?;
    flushed?;
    Ok(written)
}

async fn write_chunks(
    file: &mut File,
    response: Response,
    url: &str,
    path: &Path,
    chunk_size: usize,
    progress: &mut dyn ProgressSink,
) -> Result<u64, DownloadError> {
    let mut stream = response.bytes_stream();
    let mut pending: Vec<u8> = Vec::with_capacity(chunk_size);
    let mut bytes_written: u64 = 0;
    let mut stream_error = None;

    while let Some(next) = stream.next().await {
        let bytes = match next {
            Ok(bytes) => bytes,
            Err(e) => {
                stream_error = Some(DownloadError::network(url, e));
                break;
            }
        };

        let mut rest: &[u8] = &bytes;
        while !rest.is_empty() {
            let take = (chunk_size - pending.len()).min(rest.len());
            pending.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
            if pending.len() == chunk_size {
                bytes_written += write_chunk(file, &pending, path, progress).await?;
                pending.clear();
            }
        }
    }

    // Whatever arrived before the stream ended still goes to disk.
    if !pending.is_empty() {
        bytes_written += write_chunk(file, &pending, path, progress).await?;
    }

    match stream_error {
        Some(error) => Err(error),
        None => Ok(bytes_written),
    }
}

async fn write_chunk(
    file: &mut File,
    chunk: &[u8],
    path: &Path,
    progress: &mut dyn ProgressSink,
) -> Result<u64, DownloadError> {
    file.write_all(chunk)
        .await
        .map_err(|e| DownloadError::io(PathBuf::from(path), e))?;
    let len = chunk.len() as u64;
    progress.advance(len);
    Ok(len)
}
