//! domainsplit Core Library
//!
//! This crate splits URL-like strings into their structural components:
//! scheme, subdomain, registrable domain, port, public suffix, and path.
//! The hard part is the domain/suffix boundary: public suffixes are
//! multi-label and ambiguous (`com`, `co.uk`, `blogspot.co.uk`), so the
//! split is resolved against a loaded copy of the public suffix list
//! rather than any fixed grammar.
//!
//! # Architecture
//!
//! Parsing is a pipeline of four ordered extraction steps (scheme, host
//! with suffix resolution, port, path) over a single remaining-input
//! cursor. Each step consumes a matched prefix and returns the remainder;
//! there is no shared mutable parse state, so a [`SuffixTable`] built once
//! can serve concurrent `parse` calls from any number of threads.
//!
//! Parsing never fails: malformed input degrades to a [`ParsedUrl`] with
//! the unresolved fields left empty.
//!
//! # Modules
//!
//! - `suffix`: normalized public suffix table with exact membership tests
//! - `url`: the component extraction pipeline
//!
//! # Examples
//!
//! ```
//! use ds_core::{parse, SuffixTable};
//!
//! let table = SuffixTable::from_lines(["com", "co.uk"]);
//! let parsed = parse("https://mail.google.com/inbox", &table);
//! assert_eq!(parsed.subdomain, "mail");
//! assert_eq!(parsed.domain, "google");
//! assert_eq!(parsed.suffix, "com");
//! ```

pub mod suffix;
pub mod url;

// Re-export commonly used types
pub use suffix::SuffixTable;
pub use url::{parse, ParsedUrl};
