//! Public suffix table
//!
//! An immutable collection of public suffix entries, built once from the
//! raw lines of `public_suffix_list.dat` and shared read-only across
//! parses. Entries are stored de-marked: a wildcard rule like `*.ck` is
//! recorded as `ck`, never expanded.

/// Normalized public suffix entries with exact membership lookup.
///
/// The table is append-only during construction and never mutated
/// afterwards, so `&SuffixTable` can be shared freely across threads.
/// An empty table is valid and simply never matches.
#[derive(Debug, Default, Clone)]
pub struct SuffixTable {
    entries: Vec<String>,
}

impl SuffixTable {
    /// Build a table from raw suffix list lines.
    ///
    /// Blank lines, `//` comments, and `!` exception rules are discarded;
    /// wildcard markers (`*.`) are stripped and only the concrete
    /// remainder is kept. A line survives only if, after de-marking, it
    /// starts with an ASCII lowercase letter.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .filter_map(|line| normalize_line(line.as_ref()).map(str::to_owned))
            .collect();
        Self { entries }
    }

    /// Exact, case-sensitive membership test against the table.
    ///
    /// Candidates are expected to be lowercase already; no wildcard
    /// expansion happens here.
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.iter().any(|entry| entry == candidate)
    }

    /// Number of suffix entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reduce a raw list line to its suffix entry, or `None` to discard it.
fn normalize_line(line: &str) -> Option<&str> {
    let demarked = line.trim().trim_start_matches(['*', '.']);
    match demarked.as_bytes().first() {
        Some(b) if b.is_ascii_lowercase() => Some(demarked),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_keeps_plain_entries() {
        let table = SuffixTable::from_lines(["com", "co.uk", "xn--p1ai"]);
        assert_eq!(table.len(), 3);
        assert!(table.contains("com"));
        assert!(table.contains("co.uk"));
        assert!(table.contains("xn--p1ai"));
    }

    #[test]
    fn test_from_lines_skips_blanks_and_comments() {
        let table = SuffixTable::from_lines([
            "// ===BEGIN ICANN DOMAINS===",
            "",
            "   ",
            "com",
            "// This is a comment",
        ]);
        assert_eq!(table.len(), 1);
        assert!(table.contains("com"));
    }

    #[test]
    fn test_from_lines_demarks_wildcards() {
        let table = SuffixTable::from_lines(["*.ck", "*.kawasaki.jp"]);
        assert!(table.contains("ck"));
        assert!(table.contains("kawasaki.jp"));
        assert!(!table.contains("*.ck"));
    }

    #[test]
    fn test_from_lines_drops_exception_rules() {
        let table = SuffixTable::from_lines(["!www.ck", "ck"]);
        assert_eq!(table.len(), 1);
        assert!(!table.contains("www.ck"));
    }

    #[test]
    fn test_from_lines_trims_whitespace() {
        let table = SuffixTable::from_lines(["  com  ", "\tco.uk"]);
        assert!(table.contains("com"));
        assert!(table.contains("co.uk"));
    }

    #[test]
    fn test_contains_is_exact() {
        let table = SuffixTable::from_lines(["co.uk"]);
        assert!(!table.contains("uk"));
        assert!(!table.contains("o.uk"));
        assert!(!table.contains("CO.UK"));
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = SuffixTable::from_lines(Vec::<&str>::new());
        assert!(table.is_empty());
        assert!(!table.contains("com"));
        assert!(!table.contains(""));
    }
}
