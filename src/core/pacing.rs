use std::time::Duration;

/// Fixed courtesy delay between batch scans, so sequential lookups do not
/// hammer the external services. Not a rate guarantee.
pub struct Pacing {
    interval: Duration,
    started: bool,
}

impl Pacing {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            started: false,
        }
    }

    /// Sleeps for the configured interval, except before the first scan.
    pub async fn wait(&mut self) {
        if !self.started {
            self.started = true;
            return;
        }
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}
