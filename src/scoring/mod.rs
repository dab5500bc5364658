//! Risk aggregation: combines checker signals into a scored verdict

use crate::core::signal::Signal;
use std::fmt;

pub const MAX_RISK: u16 = 100;

const SAFE_CEILING: u8 = 30;
const SUSPICIOUS_CEILING: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Suspicious,
    Phishing,
}

impl Verdict {
    /// Pure step function of the clamped total; no other state involved.
    pub fn from_risk(total: u8) -> Self {
        if total <= SAFE_CEILING {
            Verdict::Safe
        } else if total <= SUSPICIOUS_CEILING {
            Verdict::Suspicious
        } else {
            Verdict::Phishing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Suspicious => "Suspicious",
            Verdict::Phishing => "Phishing",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Safe => write!(f, "✅ Safe"),
            Verdict::Suspicious => write!(f, "⚠️  Suspicious"),
            Verdict::Phishing => write!(f, "🚨 Phishing"),
        }
    }
}

/// Aggregate of one URL's scan. Created once, never mutated. Persistence
/// goes through `reporting::model::ScanRecord`, which borrows from this.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub url: String,
    pub total_risk: u8,
    pub notes: Vec<String>,
    pub verdict: Verdict,
}

/// Sums every contribution, clamps to [0, 100], concatenates the notes in
/// {lexical…, age, threat} order and classifies. Pure and infallible: every
/// upstream checker degrades to a zero-risk signal instead of erroring, so
/// there is no failure mode here.
pub fn aggregate(url: &str, lexical: Vec<Signal>, age: Signal, threat: Signal) -> ScanResult {
    let mut notes = Vec::with_capacity(lexical.len() + 2);
    let mut raw: u16 = 0;

    for signal in lexical.into_iter().chain([age, threat]) {
        raw += signal.contribution;
        notes.push(signal.note);
    }

    let total_risk = raw.min(MAX_RISK) as u8;
    ScanResult {
        url: url.to_string(),
        total_risk,
        notes,
        verdict: Verdict::from_risk(total_risk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral(note: &str) -> Signal {
        Signal::degraded(note)
    }

    #[test]
    fn verdict_bands_have_exact_edges() {
        assert_eq!(Verdict::from_risk(0), Verdict::Safe);
        assert_eq!(Verdict::from_risk(30), Verdict::Safe);
        assert_eq!(Verdict::from_risk(31), Verdict::Suspicious);
        assert_eq!(Verdict::from_risk(60), Verdict::Suspicious);
        assert_eq!(Verdict::from_risk(61), Verdict::Phishing);
        assert_eq!(Verdict::from_risk(100), Verdict::Phishing);
    }

    #[test]
    fn raw_sum_over_hundred_is_clamped() {
        let lexical = vec![
            Signal::new(25, "Risky TLD: .tk"),
            Signal::new(25, "Risky TLD: .ml"),
            Signal::new(20, "Missing HTTPS"),
            Signal::new(20, "Suspicious term: login"),
        ];
        let result = aggregate(
            "http://login.tk.ml",
            lexical,
            Signal::new(25, "New domain: 3 days"),
            Signal::new(30, "Safe Browsing flags it unsafe"),
        );
        assert_eq!(result.total_risk, 100);
        assert_eq!(result.verdict, Verdict::Phishing);
    }

    #[test]
    fn notes_keep_lexical_age_threat_order() {
        let result = aggregate(
            "https://example.com/a",
            vec![Signal::new(20, "Missing HTTPS")],
            neutral("Older domain: 900 days"),
            neutral("Safe Browsing reports it safe"),
        );
        assert_eq!(
            result.notes,
            vec![
                "Missing HTTPS",
                "Older domain: 900 days",
                "Safe Browsing reports it safe"
            ]
        );
    }

    #[test]
    fn threat_match_adds_exactly_thirty() {
        let clean = aggregate(
            "https://example.com/a",
            vec![],
            neutral("Older domain: 900 days"),
            neutral("Safe Browsing reports it safe"),
        );
        let flagged = aggregate(
            "https://example.com/a",
            vec![],
            neutral("Older domain: 900 days"),
            Signal::new(30, "Safe Browsing flags it unsafe"),
        );
        assert_eq!(flagged.total_risk, clean.total_risk + 30);
    }

    #[test]
    fn all_degraded_signals_still_produce_a_verdict() {
        let result = aggregate(
            "https://example.com/a",
            vec![],
            neutral("Age check failed"),
            neutral("No valid API key provided"),
        );
        assert_eq!(result.total_risk, 0);
        assert_eq!(result.verdict, Verdict::Safe);
        assert_eq!(result.notes.len(), 2);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let signals = || {
            (
                vec![Signal::new(20, "Missing HTTPS")],
                Signal::new(15, "Young domain: 45 days"),
                neutral("Safe Browsing reports it safe"),
            )
        };
        let (l1, a1, t1) = signals();
        let (l2, a2, t2) = signals();
        let first = aggregate("http://example.com/x", l1, a1, t1);
        let second = aggregate("http://example.com/x", l2, a2, t2);
        assert_eq!(first.total_risk, second.total_risk);
        assert_eq!(first.notes, second.notes);
        assert_eq!(first.verdict, second.verdict);
    }
}
