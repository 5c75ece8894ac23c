//! URL component extraction pipeline
//!
//! Splits a raw URL-like string into scheme, subdomain, domain, port,
//! suffix, and path by running four extraction steps in a fixed order.
//! Each step scans the remaining input directly as bytes, consumes the
//! prefix it recognizes, and hands the remainder to the next step; a step
//! whose pattern is absent is a no-op. No step ever fails, so any input
//! yields a result with the unresolved fields left empty.

use crate::suffix::SuffixTable;

/// Structural components of a URL-like string.
///
/// Every field defaults to empty and is either fully populated by its
/// extraction step or left at the default. When `suffix` covers the whole
/// registrable name (a bare suffix like `blogspot.co.uk`), `domain` and
/// `subdomain` stay empty; otherwise `domain` is exactly one label and
/// `subdomain` holds the leading labels joined by `.`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub subdomain: String,
    pub domain: String,
    pub port: String,
    pub suffix: String,
    pub path: String,
}

/// Parse a raw string into its components using the given suffix table.
///
/// Surrounding whitespace is trimmed first. Pure function of its inputs;
/// never fails.
pub fn parse(raw: &str, table: &SuffixTable) -> ParsedUrl {
    let mut result = ParsedUrl::default();
    let rest = raw.trim();
    let rest = take_scheme(rest, &mut result);
    let rest = take_host(rest, table, &mut result);
    let rest = take_port(rest, &mut result);
    take_path(rest, &mut result);
    result
}

// =============================================================================
// Step A: Scheme
// =============================================================================

/// Consume a `<token>?:?//` prefix if present.
///
/// The token may be empty and the colon optional, so `https://host`,
/// `://host`, and protocol-relative `//host` all match. Bare hosts leave
/// the cursor untouched.
fn take_scheme<'a>(rest: &'a str, result: &mut ParsedUrl) -> &'a str {
    let bytes = rest.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
        pos += 1;
    }
    let token_end = pos;
    if bytes.get(pos) == Some(&b':') {
        pos += 1;
    }
    if rest[pos..].starts_with("//") {
        result.scheme = rest[..token_end].to_string();
        &rest[pos + 2..]
    } else {
        rest
    }
}

// =============================================================================
// Step B: Host, domain, and suffix
// =============================================================================

/// Evaluate the host portion and consume it from the cursor.
///
/// Dotted-quad IPv4 literals become `domain` verbatim with no suffix
/// resolution. Anything else host-like goes through the suffix resolver.
/// Either way the dotted-label run is stripped, so the port step only
/// sees what follows the host.
fn take_host<'a>(rest: &'a str, table: &SuffixTable, result: &mut ParsedUrl) -> &'a str {
    if let Some(ip) = match_ipv4(rest) {
        result.domain = ip.to_string();
    } else if let Some(host) = match_host_run(rest) {
        resolve_suffix(host, table, result);
    }
    // Host removal is shared by both branches: the dotted-label run covers
    // dotted-quad literals too.
    match match_host_run(rest) {
        Some(host) => &rest[host.len()..],
        None => rest,
    }
}

/// Match a leading dotted-quad IPv4 literal: four decimal 0-255 octets.
fn match_ipv4(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    for group in 0..4 {
        pos += match_octet(&bytes[pos..])?;
        if group < 3 {
            if bytes.get(pos) != Some(&b'.') {
                return None;
            }
            pos += 1;
        }
    }
    Some(&s[..pos])
}

/// Longest decimal octet (0-255) at the start of `bytes`, as a length.
///
/// Multi-digit octets must not start with `0`.
fn match_octet(bytes: &[u8]) -> Option<usize> {
    for len in (1..=3).rev() {
        if bytes.len() < len || !bytes[..len].iter().all(u8::is_ascii_digit) {
            continue;
        }
        if len > 1 && bytes[0] == b'0' {
            continue;
        }
        let mut value = 0u32;
        for &b in &bytes[..len] {
            value = value * 10 + u32::from(b - b'0');
        }
        if value <= 255 {
            return Some(len);
        }
    }
    None
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Match the longest leading host-like run: two or more word-character
/// labels separated by single dots. A trailing dot is not part of the run.
fn match_host_run(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = word_run_end(bytes, 0)?;
    let mut labels = 1;
    while bytes.get(end) == Some(&b'.') {
        match word_run_end(bytes, end + 1) {
            Some(next) => {
                end = next;
                labels += 1;
            }
            None => break,
        }
    }
    if labels >= 2 {
        Some(&s[..end])
    } else {
        None
    }
}

/// End of the word-character run starting at `start`, or `None` if the
/// run is empty.
fn word_run_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;
    while pos < bytes.len() && is_word_byte(bytes[pos]) {
        pos += 1;
    }
    if pos > start {
        Some(pos)
    } else {
        None
    }
}

/// Resolve the suffix/domain/subdomain split for a candidate host.
///
/// Grows a candidate suffix right-to-left one label at a time and tests
/// table membership after every prepend. Each hit overwrites the previous
/// split; growth is strictly lengthening, so the last hit is the longest
/// suffix present in the table. That override is load-bearing: `co.uk`
/// must beat a bare `uk` entry, and a whole-host entry like
/// `blogspot.co.uk` must beat its own tail. If no candidate ever matches,
/// all three fields stay empty.
fn resolve_suffix(host: &str, table: &SuffixTable, result: &mut ParsedUrl) {
    let mut grown = String::new();
    for label in host.rsplit('.') {
        if grown.is_empty() {
            grown = label.to_string();
        } else {
            grown = format!("{label}.{grown}");
        }
        if table.contains(&grown) {
            log::trace!("suffix candidate {grown:?} matched for host {host:?}");
            apply_split(host, &grown, result);
        }
    }
}

/// Write the suffix/domain/subdomain fields for a confirmed suffix.
fn apply_split(host: &str, suffix: &str, result: &mut ParsedUrl) {
    let remainder = host.replacen(&format!(".{suffix}"), "", 1);
    if remainder == suffix {
        // The whole host is the suffix.
        result.domain.clear();
        result.subdomain.clear();
    } else {
        match remainder.rsplit_once('.') {
            Some((subdomain, domain)) => {
                result.domain = domain.to_string();
                result.subdomain = subdomain.to_string();
            }
            None => {
                result.domain = remainder;
                result.subdomain.clear();
            }
        }
    }
    result.suffix = suffix.to_string();
}

// =============================================================================
// Step C: Port
// =============================================================================

/// Consume a `:<digits>` prefix if present.
fn take_port<'a>(rest: &'a str, result: &mut ParsedUrl) -> &'a str {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b':') {
        return rest;
    }
    let mut pos = 1;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos > 1 {
        result.port = rest[1..pos].to_string();
        &rest[pos..]
    } else {
        rest
    }
}

// =============================================================================
// Step D: Path
// =============================================================================

/// Take the remainder verbatim as the path when it starts with `/`.
///
/// Query strings ride along undecoded; a remainder not starting with `/`
/// leaves the path empty.
fn take_path(rest: &str, result: &mut ParsedUrl) {
    if rest.starts_with('/') {
        result.path = rest.to_string();
    }
}
