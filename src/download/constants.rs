//! Constants for the download module (timeouts, chunking, request headers).

/// Timeout for the HEAD probe (10 seconds).
pub const HEAD_TIMEOUT_SECS: u64 = 10;

/// Per-read timeout while streaming the GET body (20 seconds).
pub const GET_TIMEOUT_SECS: u64 = 20;

/// Size of each chunk written to disk and reported to the progress sink (1 MiB).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Content-Type assumed when the server does not send one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension used when no mapping exists for the response Content-Type.
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Stem used when sanitization leaves nothing of the server-provided name.
pub const FALLBACK_STEM: &str = "download";
