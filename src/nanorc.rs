//! Maintains the include directive for the highlighting file in `~/.nanorc`.
//!
//! Any earlier directive for the highlighting file is dropped before a fresh
//! one is appended, so repeated runs converge on a single include line while
//! every other line keeps its position. The config is handled as raw bytes:
//! lines that are not UTF-8 pass through untouched.
use crate::error::Result;
use crate::fsutil::{path_status, read_bytes, write_bytes};
use crate::paths::{NanoPaths, HIGHLIGHTING_FILE_NAME};
use std::borrow::Cow;
use std::path::Path;

const INCLUDE_KEYWORD: &[u8] = b"include";
const DIRECTIVE_MARKER: &[u8] = b"# automatically added by dev";

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

/// Render the include line pointing nano at `highlighting`.
pub fn include_directive(highlighting: &Path) -> Vec<u8> {
    let path = path_bytes(highlighting);
    let mut line = Vec::with_capacity(path.len() + DIRECTIVE_MARKER.len() + 12);
    line.extend_from_slice(b"include \"");
    line.extend_from_slice(&path);
    line.extend_from_slice(b"\" ");
    line.extend_from_slice(DIRECTIVE_MARKER);
    line
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// True when `line` includes the highlighting file: `include` followed
/// somewhere later by `.gitcommit.nanorc`, ignoring ASCII case.
pub fn is_highlighting_include(line: &[u8]) -> bool {
    let lowered = line.to_ascii_lowercase();
    match find(&lowered, INCLUDE_KEYWORD) {
        Some(start) => find(
            &lowered[start + INCLUDE_KEYWORD.len()..],
            HIGHLIGHTING_FILE_NAME.as_bytes(),
        )
        .is_some(),
        None => false,
    }
}

/// Rebuild nanorc content so it ends with exactly one highlighting include.
///
/// `existing` is `None` when the file is absent. Lines are split on `\n`
/// only, so a `\r` stays with its line. The result always ends with a
/// newline.
pub fn relink(existing: Option<&[u8]>, highlighting: &Path) -> Vec<u8> {
    let directive = include_directive(highlighting);
    let mut lines: Vec<&[u8]> = existing
        .map(|bytes| {
            bytes
                .split(|&b| b == b'\n')
                .filter(|line| !is_highlighting_include(line))
                .collect()
        })
        .unwrap_or_default();

    match lines.last_mut() {
        Some(last) if last.is_empty() => *last = directive.as_slice(),
        _ => lines.push(directive.as_slice()),
    }
    lines.push(b"");
    lines.join(&b'\n')
}

/// Point `~/.nanorc` at the highlighting file, creating the config if needed.
pub fn link_nanorc(paths: &NanoPaths, highlighting: &Path) -> Result<()> {
    let path = paths.nanorc_path();
    let existing = if path_status(&path)?.exists() {
        Some(read_bytes(&path)?)
    } else {
        tracing::debug!(path = %path.display(), "nanorc missing; starting empty");
        None
    };
    let updated = relink(existing.as_deref(), highlighting);
    tracing::info!(path = %path.display(), "updating nanorc include");
    write_bytes(&path, &updated)
}
