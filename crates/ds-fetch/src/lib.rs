//! Public suffix list acquisition
//!
//! Downloads `public_suffix_list.dat` and caches it on disk so the core
//! parser can be fed raw lines without touching the network on every run.
//! A cache file that is missing or zero-length counts as stale and
//! triggers a fresh download; anything already on disk is trusted as-is.
//!
//! All failure modes live here: the core never fails, so every network or
//! filesystem error must surface to the caller before a table is built.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use ds_core::SuffixTable;

/// Canonical location of the public suffix list.
pub const SUFFIX_LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

/// File name of the on-disk cache inside the cache directory.
pub const CACHE_FILE_NAME: &str = "public_suffix_list.dat";

/// Error type for suffix list acquisition.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("suffix list request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0} from suffix list server")]
    Status(u16),
    #[error("suffix list response body was empty")]
    EmptyBody,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Path of the cache file inside `dir`.
pub fn cache_path(dir: &Path) -> PathBuf {
    dir.join(CACHE_FILE_NAME)
}

/// Whether the cache at `path` needs a fresh download.
///
/// Missing and zero-length files are stale; any readable non-empty file
/// is considered current.
pub fn is_stale(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    }
}

/// Make sure a usable suffix list exists under `dir`, downloading it if
/// the cache is stale, and return the cache file path.
pub async fn ensure_list(client: &reqwest::Client, dir: &Path) -> Result<PathBuf, FetchError> {
    let path = cache_path(dir);
    if is_stale(&path) {
        download_list(client, &path).await?;
    } else {
        debug!("using cached suffix list at {}", path.display());
    }
    Ok(path)
}

/// Download the suffix list into `path`, replacing whatever is there.
pub async fn download_list(client: &reqwest::Client, path: &Path) -> Result<(), FetchError> {
    info!("downloading public suffix list from {SUFFIX_LIST_URL}");
    let response = client.get(SUFFIX_LIST_URL).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &body)?;
    info!("cached {} bytes at {}", body.len(), path.display());
    Ok(())
}

/// Read the cached list back as raw lines for the table builder.
pub fn load_lines(path: &Path) -> Result<Vec<String>, FetchError> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Convenience: read the cache at `path` and build a [`SuffixTable`].
pub fn load_table(path: &Path) -> Result<SuffixTable, FetchError> {
    let lines = load_lines(path)?;
    let table = SuffixTable::from_lines(lines);
    debug!("loaded {} suffix entries from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ds-fetch-test-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_cache_path_joins_file_name() {
        let path = cache_path(Path::new("/var/cache/domainsplit"));
        assert_eq!(
            path,
            Path::new("/var/cache/domainsplit").join(CACHE_FILE_NAME)
        );
    }

    #[test]
    fn test_missing_cache_is_stale() {
        let dir = scratch_dir("missing");
        assert!(is_stale(&dir.join("does-not-exist.dat")));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_cache_is_stale() {
        let dir = scratch_dir("empty");
        let path = cache_path(&dir);
        fs::write(&path, "").unwrap();
        assert!(is_stale(&path));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_populated_cache_is_current() {
        let dir = scratch_dir("populated");
        let path = cache_path(&dir);
        fs::write(&path, "com\nco.uk\n").unwrap();
        assert!(!is_stale(&path));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_table_from_cache() {
        let dir = scratch_dir("table");
        let path = cache_path(&dir);
        fs::write(&path, "// comment\n\ncom\n*.ck\n!www.ck\nco.uk\n").unwrap();
        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.contains("com"));
        assert!(table.contains("ck"));
        assert!(table.contains("co.uk"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_lines_missing_file_is_io_error() {
        let dir = scratch_dir("io-error");
        let err = load_lines(&dir.join("nope.dat")).unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
        fs::remove_dir_all(&dir).unwrap();
    }
}
