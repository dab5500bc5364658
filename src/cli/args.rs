use clap::Parser;

/// PhishGuard – phishing risk scoring for URLs
#[derive(Parser, Debug)]
#[command(
    name = "phishguard",
    version,
    about = "PhishGuard – phishing risk scoring for URLs",
    long_about = r#"
PhishGuard estimates the phishing risk of a URL by combining three signals:

  • Lexical heuristics (scheme, length, risky TLDs, suspicious keywords, path)
  • Domain registration age via RDAP
  • Google Safe Browsing reputation lookup

Each signal contributes a bounded amount of risk; the total is clamped to
0-100 and mapped to a verdict:

  0-30    ✅ Safe
  31-60   ⚠️  Suspicious
  61-100  🚨 Phishing

Lookup failures never abort a scan: the affected signal degrades to zero risk
with an explanatory note, and the verdict is computed from what remains.
"#,
    after_help = r#"EXAMPLES:

Single URL:
  phishguard -t http://secure-login.tk/
  phishguard -t https://example.com/docs --api-key AIza...

Batch (writes phishguard_log.json when done):
  phishguard -b "http://a.tk/, https://b.example.com/x, http://c.ml/login"
  phishguard -b "url1, url2" --delay-ms 2000 -o audit_log.json

Extra indicators:
  phishguard -t http://example.icu/ --risky-tld .icu --suspicious-term wallet

Interactive menu (no mode flag):
  phishguard"#
)]
pub struct Cli {
    // ═══════════════════════════════════════════════════════════════════
    // SCAN MODES
    // ═══════════════════════════════════════════════════════════════════

    /// Scan a single URL and exit
    #[arg(short, long, help_heading = "SCAN MODES")]
    pub target: Option<String>,

    /// Scan a comma-separated list of URLs as a batch, then flush the log
    #[arg(short, long, help_heading = "SCAN MODES")]
    pub batch: Option<String>,

    // ═══════════════════════════════════════════════════════════════════
    // CREDENTIALS
    // ═══════════════════════════════════════════════════════════════════

    /// Safe Browsing API key (overrides the key file)
    #[arg(long = "api-key", help_heading = "CREDENTIALS")]
    pub api_key: Option<String>,

    /// File holding the Safe Browsing API key
    #[arg(
        long = "key-file",
        default_value = "mykey.txt",
        help_heading = "CREDENTIALS"
    )]
    pub key_file: String,

    // ═══════════════════════════════════════════════════════════════════
    // INDICATORS
    // ═══════════════════════════════════════════════════════════════════

    /// Additional risky TLD suffix to flag (can be used multiple times)
    #[arg(long = "risky-tld", help_heading = "INDICATORS")]
    pub risky_tlds: Vec<String>,

    /// Additional suspicious keyword to flag (can be used multiple times)
    #[arg(long = "suspicious-term", help_heading = "INDICATORS")]
    pub suspicious_terms: Vec<String>,

    // ═══════════════════════════════════════════════════════════════════
    // OUTPUT
    // ═══════════════════════════════════════════════════════════════════

    /// Delay between batch scans in milliseconds (external-rate courtesy)
    #[arg(long = "delay-ms", default_value_t = 1000, help_heading = "OUTPUT")]
    pub delay_ms: u64,

    /// Path of the JSON scan log written after a batch run
    #[arg(
        short = 'o',
        long = "log-file",
        default_value = "phishguard_log.json",
        help_heading = "OUTPUT"
    )]
    pub log_file: String,

    /// Skip the banner display
    #[arg(long, help_heading = "OUTPUT")]
    pub no_banner: bool,
}
