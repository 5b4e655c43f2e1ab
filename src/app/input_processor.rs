//! URL collection from arguments, piped stdin, or an interactive prompt.

use std::io::{self, BufRead, Write};

/// Shown before the interactive prompt.
pub(crate) const PROMPT_BANNER: &str = "\
URL input mode
--------------------------
- Enter one URL per line
- Type 'e' when finished
--------------------------";

/// Warning for an input that is not an http(s) URL.
pub(crate) const INVALID_URL_WARNING: &str = "Invalid URL - must start with http:// or https://";

/// Warning for an empty line at the interactive prompt.
pub(crate) const EMPTY_INPUT_WARNING: &str = "Empty input - please enter a valid URL or 'e'";

/// Returns true if `url` starts with `http://` or `https://`.
pub(crate) fn is_acceptable_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Keeps acceptable URLs from the command line, warning about the rest on `out`.
pub(crate) fn filter_args<W: Write>(urls: &[String], out: &mut W) -> io::Result<Vec<String>> {
    let mut accepted = Vec::with_capacity(urls.len());
    for url in urls.iter().map(|u| u.trim()) {
        if is_acceptable_url(url) {
            accepted.push(url.to_string());
        } else {
            writeln!(out, "{INVALID_URL_WARNING}: {url}")?;
        }
    }
    Ok(accepted)
}

/// Reads URLs line by line until `e`/`E` or end of input.
///
/// With `interactive` set, each line is preceded by a numbered prompt, accepted
/// URLs are acknowledged, and empty lines produce a warning. Otherwise empty
/// lines are skipped silently and only invalid entries are reported.
pub(crate) fn collect_urls<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    interactive: bool,
) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    let mut line = String::new();

    loop {
        if interactive {
            write!(
                out,
                "Enter URL {} (or 'e' to start download): ",
                urls.len() + 1
            )?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim();

        if entry.eq_ignore_ascii_case("e") {
            break;
        }
        if entry.is_empty() {
            if interactive {
                writeln!(out, "{EMPTY_INPUT_WARNING}")?;
            }
            continue;
        }
        if is_acceptable_url(entry) {
            urls.push(entry.to_string());
            if interactive {
                writeln!(out, "URL {} added", urls.len())?;
            }
        } else {
            writeln!(out, "{INVALID_URL_WARNING}: {entry}")?;
        }
    }

    Ok(urls)
}
