use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Keeps a minimum delay between consecutive requests
pub struct RateLimiter {
    delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(remaining) = self.remaining(Instant::now()) {
            sleep(remaining).await;
        }
        self.last_request = Some(Instant::now());
    }

    fn remaining(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.duration_since(self.last_request?);
        self.delay.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_is_not_delayed() {
        let limiter = RateLimiter::new(100);
        assert_eq!(limiter.remaining(Instant::now()), None);
    }

    #[test]
    fn test_remaining_delay_after_request() {
        let mut limiter = RateLimiter::new(100);
        let start = Instant::now();
        limiter.last_request = Some(start);

        assert_eq!(
            limiter.remaining(start + Duration::from_millis(30)),
            Some(Duration::from_millis(70))
        );
        assert_eq!(limiter.remaining(start + Duration::from_millis(100)), None);
        assert_eq!(limiter.remaining(start + Duration::from_millis(250)), None);
    }
}
