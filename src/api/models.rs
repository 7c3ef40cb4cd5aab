use serde::{Deserialize, Serialize};

use crate::config::LeagueTier;
use crate::domain::{LeagueWithMatches, LeagueWithSeries};

/// `LeagueRequestType` input: which window of leagues to return
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaguesRequest {
    pub tiers: Vec<LeagueTier>,
    pub take: usize,
    pub skip: usize,
}

/// Variables of the full-history query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPageVariables {
    pub leagues_request: LeaguesRequest,
    pub take_series: usize,
    pub skip_series: usize,
}

/// `LeagueMatchesRequestType` input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesRequest {
    /// Inclusive lower bound, epoch seconds
    pub start_date_time: i64,
    pub take: usize,
    pub skip: usize,
}

/// Variables of the incremental query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesPageVariables {
    pub leagues_request: LeaguesRequest,
    pub matches_request: MatchesRequest,
}

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: &'a V,
}

#[derive(Debug, Deserialize)]
pub struct LeagueSeriesData {
    #[serde(default)]
    pub leagues: Option<Vec<LeagueWithSeries>>,
}

#[derive(Debug, Deserialize)]
pub struct LeagueMatchesData {
    #[serde(default)]
    pub leagues: Option<Vec<LeagueWithMatches>>,
}
