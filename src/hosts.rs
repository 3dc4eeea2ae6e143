//! Hosts file line rewriting.
//!
//! The file is never parsed into entries: every operation is a single pass
//! over its lines, matching the hostname with a whole-word regex. Content is
//! handled as bytes so lines that are not valid UTF-8 survive a rewrite
//! untouched.

use std::borrow::Cow;
use std::net::Ipv4Addr;

use regex::bytes::Regex;
use serde::Deserialize;

use crate::error::HostsError;
use crate::platform::HostsEditor;

/// Which blank lines survive a delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankLinePolicy {
    /// Keep every blank line.
    #[default]
    Preserve,
    /// Keep a blank line only when the line before it contained a `#`.
    AfterComment,
}

/// Result of an add that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Result of a delete that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { lines: usize },
    NotFound,
}

/// Add `hostname` pointing at `address`, unless the hostname is already present.
pub fn add_entry(editor: &dyn HostsEditor, hostname: &str, address: Ipv4Addr) -> Result<AddOutcome, HostsError> {
    editor.add_entry(hostname, address)
}

/// Delete every line whose last token is `hostname`.
pub fn delete_entry(editor: &dyn HostsEditor, hostname: &str) -> Result<DeleteOutcome, HostsError> {
    editor.delete_entry(hostname)
}

/// Non-comment, non-blank lines of the hosts file.
pub fn list_entries(editor: &dyn HostsEditor) -> Result<Vec<String>, HostsError> {
    editor.entries()
}

fn hostname_regex(pattern: String) -> Result<Regex, HostsError> {
    Regex::new(&pattern).map_err(|e| HostsError::InvalidArgument(format!("unusable hostname: {e}")))
}

const BOM: &[u8] = b"\xef\xbb\xbf";

/// Split a leading UTF-8 byte order mark off `content`.
pub fn split_bom(content: &[u8]) -> (&[u8], &[u8]) {
    match content.strip_prefix(BOM) {
        Some(rest) => (BOM, rest),
        None => (&BOM[..0], content),
    }
}

/// Lines of `content` without their `\n` / `\r\n` terminators.
fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    (!content.is_empty())
        .then(|| body.split(|&b| b == b'\n'))
        .into_iter()
        .flatten()
        .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// True if `hostname` appears after whitespace as a whole word, followed by
/// whitespace or end of line.
pub fn contains_hostname(content: &[u8], hostname: &str) -> Result<bool, HostsError> {
    let re = hostname_regex(format!(r"(?m)\s\b{}\b(?:\s|$)", regex::escape(hostname)))?;
    Ok(re.is_match(split_bom(content).1))
}

/// Text to append to `content` for a new entry: `<address>\t\t<hostname>`,
/// preceded by a line break when the file does not already end with one.
pub fn entry_text(content: &[u8], address: Ipv4Addr, hostname: &str, eol: &str) -> String {
    let body = split_bom(content).1;
    let lead = if body.is_empty() || body.ends_with(eol.as_bytes()) || body.ends_with(b"\n") {
        ""
    } else {
        eol
    };
    format!("{lead}{address}\t\t{hostname}{eol}")
}

/// Content with every line ending in `hostname` removed, or `None` when no
/// line matched. Kept lines are joined with `eol`, each one terminated; a
/// leading byte order mark is kept.
pub fn remove_hostname(
    content: &[u8],
    hostname: &str,
    policy: BlankLinePolicy,
    eol: &str,
) -> Result<Option<(Vec<u8>, usize)>, HostsError> {
    let re = hostname_regex(format!(r"\s\b{}\b\s*$", regex::escape(hostname)))?;
    let (bom, body) = split_bom(content);
    let mut out = Vec::with_capacity(content.len());
    out.extend_from_slice(bom);
    let mut removed = 0;
    let mut last_was_comment = false;

    for line in lines(body) {
        if re.is_match(line) {
            removed += 1;
        } else if !is_blank(line) || keep_blank(policy, last_was_comment) {
            out.extend_from_slice(line);
            out.extend_from_slice(eol.as_bytes());
        }
        last_was_comment = line.contains(&b'#');
    }

    Ok((removed > 0).then_some((out, removed)))
}

fn keep_blank(policy: BlankLinePolicy, last_was_comment: bool) -> bool {
    match policy {
        BlankLinePolicy::Preserve => true,
        BlankLinePolicy::AfterComment => last_was_comment,
    }
}

/// Lines that are neither blank nor start with `#`, decoded lossily.
pub fn entry_lines(content: &[u8]) -> impl Iterator<Item = Cow<'_, str>> {
    lines(split_bom(content).1)
        .filter(|l| !is_blank(l) && !l.starts_with(b"#"))
        .map(String::from_utf8_lossy)
}
