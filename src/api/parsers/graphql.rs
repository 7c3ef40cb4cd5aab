use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct Envelope<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Decode a GraphQL response body, failing on reported errors or missing data
pub fn extract_data<D: DeserializeOwned>(body: &str) -> Result<D> {
    let envelope: Envelope<D> =
        serde_json::from_str(body).context("Failed to parse GraphQL response")?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        bail!("GraphQL query failed: {}", messages.join("; "));
    }

    envelope.data.context("GraphQL response has no data")
}
