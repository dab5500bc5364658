//! Session context: settings resolved once at startup and threaded through
//! every scan.

use crate::cli::args::Cli;
use crate::core::indicators::Indicators;
use anyhow::{Context as _, Result};
use reqwest::Client;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Context {
    /// Safe Browsing API key, opaque text. May be empty or a placeholder;
    /// the threat-intel checker degrades rather than erroring in that case.
    pub api_key: String,
    pub client: Client,
    pub indicators: Indicators,
    pub batch_delay_ms: u64,
    pub log_path: String,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_key = resolve_api_key(cli)?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let mut indicators = Indicators::default();
        for tld in &cli.risky_tlds {
            indicators.add_tld(tld);
        }
        for term in &cli.suspicious_terms {
            indicators.add_term(term);
        }

        Ok(Self {
            api_key,
            client,
            indicators,
            batch_delay_ms: cli.delay_ms,
            log_path: cli.log_file.clone(),
        })
    }
}

/// Resolves the credential once, at session start: flag, then key file, then
/// an interactive prompt. A blank answer is allowed and simply disables the
/// threat-intel signal downstream.
fn resolve_api_key(cli: &Cli) -> Result<String> {
    if let Some(ref key) = cli.api_key {
        return Ok(key.trim().to_string());
    }

    let path = Path::new(&cli.key_file);
    if path.exists() {
        let key = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read key file {}", cli.key_file))?;
        return Ok(key.trim().to_string());
    }

    print!("\x1b[33mEnter your Google Safe Browsing API key (blank to skip): \x1b[0m");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
