use crate::reporting::model::ScanRecord;
use crate::scoring::ScanResult;
use std::path::Path;

pub fn render(history: &[ScanResult]) -> anyhow::Result<String> {
    let records: Vec<ScanRecord> = history.iter().map(ScanRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    Ok(json)
}

/// Flushes the full in-memory history, overwriting any prior log. Best-effort
/// dump; not append-safe across runs.
pub fn write(path: &Path, history: &[ScanResult]) -> anyhow::Result<()> {
    std::fs::write(path, render(history)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Verdict;

    #[test]
    fn log_records_carry_url_risk_and_notes() {
        let history = vec![ScanResult {
            url: "http://secure-login.tk/".to_string(),
            total_risk: 100,
            notes: vec!["Missing HTTPS".to_string(), "Age check failed".to_string()],
            verdict: Verdict::Phishing,
        }];
        let json = render(&history).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["url"], "http://secure-login.tk/");
        assert_eq!(value[0]["risk"], 100);
        assert_eq!(value[0]["notes"][0], "Missing HTTPS");
        // The log shape is the flat record, not the full result.
        assert!(value[0].get("verdict").is_none());
    }

    #[test]
    fn empty_history_renders_an_empty_array() {
        let json = render(&[]).unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
