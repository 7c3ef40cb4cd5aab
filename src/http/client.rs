use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result, anyhow};
use log::warn;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// HTTP client with built-in rate limiting and a fixed retry budget
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
    retries: usize,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64, retries: usize) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
            retries,
        })
    }

    /// POST a JSON body with bearer authentication and return the response text.
    ///
    /// Network failures, 429 and 5xx statuses are retried up to `retries`
    /// times after the first attempt. Other 4xx statuses fail at once.
    pub async fn post_json<B: Serialize>(&mut self, url: &str, token: &str, body: &B) -> Result<String> {
        let attempts = self.retries + 1;

        for attempt in 1..=attempts {
            self.rate_limiter.wait().await;

            let error = match self.send_post_request(url, token, body).await {
                Ok(text) => return Ok(text),
                Err(RequestFailure::Fatal(e)) => return Err(e),
                Err(RequestFailure::Transient(e)) => e,
            };

            if attempt == attempts {
                return Err(error.context(format!("Giving up on {} after {} attempts", url, attempts)));
            }
            warn!("Request to {} failed (attempt {}/{}): {:#}", url, attempt, attempts, error);
        }

        Err(anyhow!("No request attempted to {}", url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_post_request<B: Serialize>(
        &self,
        url: &str,
        token: &str,
        body: &B,
    ) -> Result<String, RequestFailure> {
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .context("Failed to send POST request")
            .map_err(RequestFailure::Transient)?;

        let status = response.status();
        if !status.is_success() {
            let error = anyhow!("API returned status: {}", status);
            return Err(if is_retryable(status) {
                RequestFailure::Transient(error)
            } else {
                RequestFailure::Fatal(error)
            });
        }

        response
            .text()
            .await
            .context("Failed to read response body")
            .map_err(RequestFailure::Transient)
    }
}

enum RequestFailure {
    Transient(anyhow::Error),
    Fatal(anyhow::Error),
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}
