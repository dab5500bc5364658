use crate::scoring::ScanResult;
use serde::Serialize;

/// One entry of the persisted scan log: the `{url, risk, notes}` shape the
/// JSON dump is made of.
#[derive(Debug, Serialize)]
pub struct ScanRecord<'a> {
    pub url: &'a str,
    pub risk: u8,
    pub notes: &'a [String],
}

impl<'a> From<&'a ScanResult> for ScanRecord<'a> {
    fn from(result: &'a ScanResult) -> Self {
        Self {
            url: &result.url,
            risk: result.total_risk,
            notes: &result.notes,
        }
    }
}
