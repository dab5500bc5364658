//! Google Safe Browsing v4 reputation lookup

use crate::core::signal::Signal;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ENDPOINT: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";
const CLIENT_ID: &str = "phishguard";
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel value shipped in the default key file.
pub const PLACEHOLDER_KEY: &str = "put-your-key-here";

const MATCH_RISK: u16 = 30;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: &'a [&'a str],
    platform_types: &'a [&'a str],
    threat_entry_types: &'a [&'a str],
    threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ThreatEntry<'a> {
    url: &'a str,
}

/// Only the presence of matches is interpreted; the entries themselves are
/// kept opaque.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    matches: Vec<Value>,
}

pub fn is_usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_KEY
}

/// Queries Safe Browsing for the URL. An absent or placeholder key
/// short-circuits before any network traffic, and transport or decode
/// problems degrade to a neutral signal; the scan always completes.
pub async fn check(client: &Client, api_key: &str, url: &str) -> Signal {
    if !is_usable_key(api_key) {
        return Signal::degraded("No valid API key provided");
    }
    match lookup(client, api_key, url).await {
        Ok(true) => Signal::new(MATCH_RISK, "Safe Browsing flags it unsafe"),
        Ok(false) => Signal::degraded("Safe Browsing reports it safe"),
        Err(err) => {
            tracing::debug!("[INTEL] lookup failed for {}: {:#}", url, err);
            Signal::degraded("Safe Browsing check error")
        }
    }
}

async fn lookup(client: &Client, api_key: &str, url: &str) -> Result<bool> {
    let request = LookupRequest {
        client: ClientInfo {
            client_id: CLIENT_ID,
            client_version: CLIENT_VERSION,
        },
        threat_info: ThreatInfo {
            threat_types: &["MALWARE", "SOCIAL_ENGINEERING"],
            platform_types: &["ANY_PLATFORM"],
            threat_entry_types: &["URL"],
            threat_entries: vec![ThreatEntry { url }],
        },
    };

    let response = client
        .post(ENDPOINT)
        .query(&[("key", api_key)])
        .json(&request)
        .send()
        .await?;
    if !response.status().is_success() {
        anyhow::bail!("threat lookup returned {}", response.status());
    }

    let body: LookupResponse = response.json().await?;
    Ok(!body.matches.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_keys_are_unusable() {
        assert!(!is_usable_key(""));
        assert!(!is_usable_key("   "));
        assert!(!is_usable_key(PLACEHOLDER_KEY));
        assert!(is_usable_key("AIzaSyA-real-looking-key"));
    }

    #[test]
    fn request_wire_shape_matches_v4_contract() {
        let request = LookupRequest {
            client: ClientInfo {
                client_id: CLIENT_ID,
                client_version: CLIENT_VERSION,
            },
            threat_info: ThreatInfo {
                threat_types: &["MALWARE", "SOCIAL_ENGINEERING"],
                platform_types: &["ANY_PLATFORM"],
                threat_entry_types: &["URL"],
                threat_entries: vec![ThreatEntry {
                    url: "http://bad.example/",
                }],
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["client"]["clientId"], "phishguard");
        assert_eq!(value["threatInfo"]["threatTypes"][0], "MALWARE");
        assert_eq!(value["threatInfo"]["platformTypes"][0], "ANY_PLATFORM");
        assert_eq!(value["threatInfo"]["threatEntryTypes"][0], "URL");
        assert_eq!(
            value["threatInfo"]["threatEntries"][0]["url"],
            "http://bad.example/"
        );
    }

    #[tokio::test]
    async fn missing_key_short_circuits_without_network() {
        let client = Client::new();
        let signal = check(&client, PLACEHOLDER_KEY, "http://bad.example/").await;
        assert_eq!(signal.contribution, 0);
        assert_eq!(signal.note, "No valid API key provided");
    }

    #[test]
    fn response_with_matches_flags_the_url() {
        let body = r#"{"matches": [{"threatType": "SOCIAL_ENGINEERING"}]}"#;
        let response: LookupResponse = serde_json::from_str(body).unwrap();
        assert!(!response.matches.is_empty());
    }

    #[test]
    fn empty_response_means_clean() {
        let response: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(response.matches.is_empty());
    }
}
