//! Configuration for the sync driver.

use catsync_engine::DiffOptions;
use std::time::Duration;

/// Configuration for one [`crate::Syncer`].
#[derive(Debug, Clone)]
pub struct SyncerConfig {
    /// Retry behavior for transient transport errors.
    pub retry: RetryConfig,
    /// How many times a version conflict triggers a refetch-and-recompute
    /// before being surfaced.
    pub max_conflict_recomputes: u32,
    /// Options handed to the diff engine.
    pub diff: DiffOptions,
}

impl SyncerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            retry: RetryConfig::default(),
            max_conflict_recomputes: 2,
            diff: DiffOptions::default(),
        }
    }

    /// Sets the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the conflict-recompute cap.
    pub fn with_max_conflict_recomputes(mut self, max: u32) -> Self {
        self.max_conflict_recomputes = max;
        self
    }

    /// Sets the diff options.
    pub fn with_diff(mut self, diff: DiffOptions) -> Self {
        self.diff = diff;
        self
    }
}

impl Default for SyncerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Initial delay between attempts.
    pub initial_delay: Duration,
    /// Maximum delay between attempts.
    pub max_delay: Duration,
    /// Multiplier for exponential backoff.
    pub backoff_multiplier: f64,
    /// Whether to add jitter to delays.
    pub add_jitter: bool,
}

impl RetryConfig {
    /// Creates a new retry configuration.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            add_jitter: true,
        }
    }

    /// Creates a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1.0,
            add_jitter: false,
        }
    }

    /// Sets the initial delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the backoff multiplier.
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Calculates the delay before a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let base_delay = self.initial_delay.as_secs_f64()
            * self.backoff_multiplier.powi(attempt.saturating_sub(1) as i32);
        let delay_secs = base_delay.min(self.max_delay.as_secs_f64());

        if self.add_jitter {
            // Up to 25% jitter
            let jitter = delay_secs * 0.25 * pseudo_jitter();
            Duration::from_secs_f64(delay_secs + jitter)
        } else {
            Duration::from_secs_f64(delay_secs)
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Simple time-derived jitter (no external RNG dependency).
fn pseudo_jitter() -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    (nanos % 1000) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syncer_config_builder() {
        let config = SyncerConfig::new()
            .with_retry(RetryConfig::no_retry())
            .with_max_conflict_recomputes(5);
        assert_eq!(config.retry.max_attempts, 1);
        assert_eq!(config.max_conflict_recomputes, 5);
    }

    #[test]
    fn backoff_doubles_until_the_cap() {
        let mut config = RetryConfig::new(6)
            .with_initial_delay(Duration::from_millis(250))
            .with_max_delay(Duration::from_secs(1))
            .with_backoff_multiplier(2.0);
        config.add_jitter = false;

        let delays: Vec<Duration> = (0..6).map(|a| config.delay_for_attempt(a)).collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(250),
                Duration::from_millis(500),
                Duration::from_secs(1),
                Duration::from_secs(1),
                Duration::from_secs(1),
            ]
        );
    }

    #[test]
    fn jitter_stays_within_a_quarter_of_the_base() {
        let config = RetryConfig::new(3).with_initial_delay(Duration::from_millis(200));
        for _ in 0..32 {
            let delay = config.delay_for_attempt(1);
            assert!(delay >= Duration::from_millis(200), "jittered below base");
            assert!(delay < Duration::from_millis(250), "jitter exceeded 25%");
        }
    }
}
