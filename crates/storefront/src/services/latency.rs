//! Artificial latency for mock services.

use std::time::Duration;

/// Simulated network delay applied by mock services before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency(Duration);

impl MockLatency {
    /// Delay used when none is configured.
    pub const DEFAULT: Self = Self(Duration::from_millis(500));

    /// No delay at all.
    pub const NONE: Self = Self(Duration::ZERO);

    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self(delay)
    }

    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }

    /// Wait for the configured delay.
    pub async fn wait(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

impl Default for MockLatency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_for_configured_delay() {
        let start = tokio::time::Instant::now();
        MockLatency::DEFAULT.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_none_returns_immediately() {
        let start = tokio::time::Instant::now();
        MockLatency::NONE.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
