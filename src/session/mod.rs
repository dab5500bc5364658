//! Scan session: drives the checkers, owns the scan history, flushes the
//! batch log.

use crate::checks::{domain_age, lexical, threat_intel};
use crate::core::context::Context;
use crate::core::pacing::Pacing;
use crate::reporting::{json, text};
use crate::scoring::{self, ScanResult};
use std::path::Path;

pub struct Session {
    context: Context,
    history: Vec<ScanResult>,
}

impl Session {
    pub fn new(context: Context) -> Self {
        Self {
            context,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[ScanResult] {
        &self.history
    }

    /// Full scan of one URL: the three checkers run in sequence, the pure
    /// aggregation step follows, and the result lands in the history.
    pub async fn scan_one(&mut self, url: &str) {
        text::print_scan_header(url);

        let lexical = lexical::check(url, &self.context.indicators);
        tracing::debug!(
            "[LEX] {} signals, {} raw risk",
            lexical.len(),
            lexical::total(&lexical)
        );
        let age = domain_age::estimate(&self.context.client, url).await;
        let threat = threat_intel::check(&self.context.client, &self.context.api_key, url).await;

        let result = scoring::aggregate(url, lexical, age, threat);
        text::print_result(&result);
        self.history.push(result);
    }

    /// Strictly sequential batch scan with a courtesy delay between URLs,
    /// then a flush of the full history to the JSON log. The dump is
    /// best-effort: a failed write is reported and never aborts the session.
    pub async fn scan_batch(&mut self, urls: &[String]) {
        let mut pacing = Pacing::new(self.context.batch_delay_ms);
        for url in urls {
            pacing.wait().await;
            self.scan_one(url).await;
        }

        match json::write(Path::new(&self.context.log_path), &self.history) {
            Ok(()) => println!(
                "{}Saved to {}{}",
                text::GREEN,
                self.context.log_path,
                text::RESET
            ),
            Err(err) => {
                tracing::warn!("[LOG] flush failed: {:#}", err);
                println!(
                    "{}Could not write scan log: {err:#}{}",
                    text::RED,
                    text::RESET
                );
            }
        }
    }

    pub fn show_history(&self) {
        text::print_history(self.history());
    }
}
