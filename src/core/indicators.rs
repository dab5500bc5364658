//! Phishing indicator lists used by the lexical checker

/// TLDs with heavy free-registration abuse.
const DEFAULT_RISKY_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".xyz", ".top"];

/// Keywords common in credential-harvesting URLs.
const DEFAULT_SUSPICIOUS_TERMS: &[&str] = &["login", "verify", "account", "secure", "bank"];

#[derive(Debug, Clone)]
pub struct Indicators {
    pub risky_tlds: Vec<String>,
    pub suspicious_terms: Vec<String>,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            risky_tlds: DEFAULT_RISKY_TLDS.iter().map(|s| s.to_string()).collect(),
            suspicious_terms: DEFAULT_SUSPICIOUS_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Indicators {
    /// Add a TLD suffix to flag; a missing leading dot is supplied.
    pub fn add_tld(&mut self, tld: &str) {
        let tld = tld.trim().to_lowercase();
        if tld.is_empty() {
            return;
        }
        let tld = if tld.starts_with('.') {
            tld
        } else {
            format!(".{tld}")
        };
        self.risky_tlds.push(tld);
    }

    pub fn add_term(&mut self, term: &str) {
        let term = term.trim().to_lowercase();
        if !term.is_empty() {
            self.suspicious_terms.push(term);
        }
    }
}
