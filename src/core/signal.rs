//! Checker output contract

/// One checker's (risk contribution, note) output for a URL.
///
/// Checkers never fail: lookup and parse problems are absorbed at the checker
/// boundary and come back as a degraded, zero-contribution signal so that a
/// scan always completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub contribution: u16,
    pub note: String,
}

impl Signal {
    pub fn new(contribution: u16, note: impl Into<String>) -> Self {
        Self {
            contribution,
            note: note.into(),
        }
    }

    /// A zero-risk signal carrying only an explanatory note.
    pub fn degraded(note: impl Into<String>) -> Self {
        Self::new(0, note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_signals_carry_no_risk() {
        let signal = Signal::degraded("Age check failed");
        assert_eq!(signal.contribution, 0);
        assert_eq!(signal.note, "Age check failed");
    }
}
