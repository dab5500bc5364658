//! Lexical URL checks for structural phishing signs

use crate::core::indicators::Indicators;
use crate::core::signal::Signal;
use url::Url;

const MISSING_HTTPS_RISK: u16 = 20;
const LONG_URL_RISK: u16 = 15;
const RISKY_TLD_RISK: u16 = 25;
const SUSPICIOUS_TERM_RISK: u16 = 20;
const NO_PATH_RISK: u16 = 10;

const MAX_URL_LEN: usize = 75;

/// Evaluates every rule independently; matches are additive, never exclusive.
/// There is no failure path: a URL that does not parse is treated as having
/// no path instead of aborting the scan.
pub fn check(url: &str, indicators: &Indicators) -> Vec<Signal> {
    let mut signals = Vec::new();
    let lower = url.to_lowercase();

    if !url.starts_with("https") {
        signals.push(Signal::new(MISSING_HTTPS_RISK, "Missing HTTPS"));
    }
    if url.len() > MAX_URL_LEN {
        signals.push(Signal::new(LONG_URL_RISK, "URL too long"));
    }
    for tld in &indicators.risky_tlds {
        if lower.contains(tld.as_str()) {
            signals.push(Signal::new(RISKY_TLD_RISK, format!("Risky TLD: {tld}")));
        }
    }
    for term in &indicators.suspicious_terms {
        if lower.contains(term.as_str()) {
            signals.push(Signal::new(
                SUSPICIOUS_TERM_RISK,
                format!("Suspicious term: {term}"),
            ));
        }
    }

    let no_path = match Url::parse(url) {
        Ok(parsed) => matches!(parsed.path(), "" | "/"),
        Err(_) => true,
    };
    if no_path {
        signals.push(Signal::new(NO_PATH_RISK, "No path detected"));
    }

    signals
}

/// Running contribution total of a signal set.
pub fn total(signals: &[Signal]) -> u16 {
    signals.iter().map(|s| s.contribution).sum()
}
