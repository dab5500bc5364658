//! Domain age estimation from RDAP registration data
//!
//! Registration data is inherently unreliable (privacy proxies, registrars
//! with inconsistent event records), so every lookup problem degrades to a
//! neutral signal instead of failing the scan. Unknown-age domains therefore
//! score zero risk; see DESIGN.md for the open question around that policy.

use crate::core::signal::Signal;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const RDAP_BASE: &str = "https://rdap.org/domain";

const NEW_DOMAIN_RISK: u16 = 25;
const YOUNG_DOMAIN_RISK: u16 = 15;
const NEW_DOMAIN_DAYS: i64 = 30;
const YOUNG_DOMAIN_DAYS: i64 = 90;

#[derive(Debug, Deserialize)]
struct RdapDomain {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapEvent {
    event_action: String,
    event_date: String,
}

/// Looks up the host's registration date and classifies its age into a risk
/// band. Never fails: any lookup or parse problem yields the neutral
/// "Age check failed" signal.
pub async fn estimate(client: &Client, url: &str) -> Signal {
    match registration_date(client, url).await {
        Ok(registered) => classify(registered, Utc::now()),
        Err(err) => {
            tracing::debug!("[AGE] lookup failed for {}: {:#}", url, err);
            Signal::degraded("Age check failed")
        }
    }
}

fn classify(registered: DateTime<Utc>, now: DateTime<Utc>) -> Signal {
    let days = (now - registered).num_days();
    if days < 0 {
        // Future-dated registration record, treat as unusable data.
        return Signal::degraded("Age check failed");
    }
    if days < NEW_DOMAIN_DAYS {
        Signal::new(NEW_DOMAIN_RISK, format!("New domain: {days} days"))
    } else if days < YOUNG_DOMAIN_DAYS {
        Signal::new(YOUNG_DOMAIN_RISK, format!("Young domain: {days} days"))
    } else {
        Signal::new(0, format!("Older domain: {days} days"))
    }
}

async fn registration_date(client: &Client, url: &str) -> Result<DateTime<Utc>> {
    let parsed = Url::parse(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow!("URL has no host"))?;

    let response = client.get(format!("{RDAP_BASE}/{host}")).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("registration lookup returned {}", response.status());
    }

    let record: RdapDomain = response.json().await?;
    // Registrars report several events; the first registration entry wins.
    let event = record
        .events
        .iter()
        .find(|e| e.event_action == "registration")
        .ok_or_else(|| anyhow!("no registration event in record"))?;

    Ok(DateTime::parse_from_rfc3339(&event.event_date)?.with_timezone(&Utc))
}
