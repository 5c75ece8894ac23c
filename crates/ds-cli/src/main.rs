//! domainsplit CLI
//!
//! CLI tool for splitting URLs into components and managing the cached
//! public suffix list.

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use ds_core::{parse, ParsedUrl, SuffixTable};
use ds_fetch::{cache_path, download_list, ensure_list, is_stale, load_table};

#[derive(Parser)]
#[command(name = "domainsplit")]
#[command(about = "Split URLs into scheme, subdomain, domain, suffix, port, and path")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse URLs against the cached public suffix list
    Parse {
        /// URLs to parse
        #[arg(required = true)]
        urls: Vec<String>,

        /// Emit one JSON object per URL
        #[arg(short, long)]
        json: bool,

        /// Directory holding the suffix list cache
        #[arg(short, long, default_value = ".")]
        cache_dir: String,

        /// Fail instead of downloading when the cache is stale
        #[arg(long)]
        offline: bool,
    },

    /// Force a fresh download of the public suffix list
    Update {
        /// Directory holding the suffix list cache
        #[arg(short, long, default_value = ".")]
        cache_dir: String,
    },

    /// Check whether candidates are public suffixes
    Check {
        /// Suffix candidates to test
        #[arg(required = true)]
        suffixes: Vec<String>,

        /// Directory holding the suffix list cache
        #[arg(short, long, default_value = ".")]
        cache_dir: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            urls,
            json,
            cache_dir,
            offline,
        } => cmd_parse(&urls, json, &cache_dir, offline).await,
        Commands::Update { cache_dir } => cmd_update(&cache_dir).await,
        Commands::Check { suffixes, cache_dir } => cmd_check(&suffixes, &cache_dir).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// JSON shape for one parsed URL.
#[derive(serde::Serialize)]
struct ParseReport<'a> {
    input: &'a str,
    scheme: &'a str,
    subdomain: &'a str,
    domain: &'a str,
    port: &'a str,
    suffix: &'a str,
    path: &'a str,
}

impl<'a> ParseReport<'a> {
    fn new(input: &'a str, parsed: &'a ParsedUrl) -> Self {
        Self {
            input,
            scheme: &parsed.scheme,
            subdomain: &parsed.subdomain,
            domain: &parsed.domain,
            port: &parsed.port,
            suffix: &parsed.suffix,
            path: &parsed.path,
        }
    }
}

async fn load_table_for(cache_dir: &str, offline: bool) -> Result<SuffixTable, String> {
    let dir = Path::new(cache_dir);
    let path = if offline {
        let path = cache_path(dir);
        if is_stale(&path) {
            return Err(format!(
                "offline mode and no usable suffix list at '{}'",
                path.display()
            ));
        }
        path
    } else {
        let client = reqwest::Client::new();
        ensure_list(&client, dir)
            .await
            .map_err(|e| format!("Failed to acquire suffix list: {e}"))?
    };

    load_table(&path).map_err(|e| format!("Failed to load '{}': {}", path.display(), e))
}

async fn cmd_parse(urls: &[String], json: bool, cache_dir: &str, offline: bool) -> Result<(), String> {
    let table = load_table_for(cache_dir, offline).await?;

    for url in urls {
        let parsed = parse(url, &table);
        if json {
            let report = ParseReport::new(url, &parsed);
            let line = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize result: {e}"))?;
            println!("{line}");
        } else {
            println!("{url}");
            println!("  scheme:    {}", parsed.scheme);
            println!("  subdomain: {}", parsed.subdomain);
            println!("  domain:    {}", parsed.domain);
            println!("  suffix:    {}", parsed.suffix);
            println!("  port:      {}", parsed.port);
            println!("  path:      {}", parsed.path);
        }
    }

    Ok(())
}

async fn cmd_update(cache_dir: &str) -> Result<(), String> {
    let path = cache_path(Path::new(cache_dir));
    if path.exists() {
        fs::remove_file(&path)
            .map_err(|e| format!("Failed to remove '{}': {}", path.display(), e))?;
    }

    let client = reqwest::Client::new();
    download_list(&client, &path)
        .await
        .map_err(|e| format!("Failed to download suffix list: {e}"))?;

    println!("Updated suffix list at {}", path.display());
    Ok(())
}

async fn cmd_check(suffixes: &[String], cache_dir: &str) -> Result<(), String> {
    let table = load_table_for(cache_dir, false).await?;

    for candidate in suffixes {
        if table.contains(candidate) {
            println!("{candidate}: public suffix");
        } else {
            println!("{candidate}: not a public suffix");
        }
    }

    Ok(())
}
