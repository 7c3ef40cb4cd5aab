use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::models::{
    GraphQlRequest, LeagueMatchesData, LeagueSeriesData, MatchesPageVariables,
    SeriesPageVariables,
};
use super::parsers;
use super::queries::{MATCHES_BY_LEAGUE_QUERY, SERIES_BY_LEAGUE_QUERY, with_match_fields};
use super::query::LeagueQuery;
use crate::config::ApiSettings;
use crate::domain::{LeagueWithMatches, LeagueWithSeries};
use crate::http::RateLimitedClient;

/// STRATZ GraphQL API client
pub struct StratzClient {
    client: RateLimitedClient,
    url: String,
    token: String,
    series_query: String,
    matches_query: String,
}

impl StratzClient {
    /// Create a new STRATZ API client
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
            settings.retries,
        )?;
        info!("Using STRATZ API at {}", settings.url);

        Ok(Self {
            client,
            url: settings.url.clone(),
            token: settings.token.clone(),
            series_query: with_match_fields(SERIES_BY_LEAGUE_QUERY),
            matches_query: with_match_fields(MATCHES_BY_LEAGUE_QUERY),
        })
    }

    async fn execute<V, D>(&mut self, query: &str, variables: &V) -> Result<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let request = GraphQlRequest { query, variables };
        let body = self.client.post_json(&self.url, &self.token, &request).await?;
        parsers::extract_data(&body)
    }
}

impl LeagueQuery for StratzClient {
    async fn leagues_with_series(
        &mut self,
        variables: &SeriesPageVariables,
    ) -> Result<Vec<LeagueWithSeries>> {
        let query = self.series_query.clone();
        let data: LeagueSeriesData = self
            .execute(&query, variables)
            .await
            .context("Failed to fetch series page")?;
        Ok(data.leagues.unwrap_or_default())
    }

    async fn leagues_with_matches(
        &mut self,
        variables: &MatchesPageVariables,
    ) -> Result<Vec<LeagueWithMatches>> {
        let query = self.matches_query.clone();
        let data: LeagueMatchesData = self
            .execute(&query, variables)
            .await
            .context("Failed to fetch matches page")?;
        Ok(data.leagues.unwrap_or_default())
    }
}
