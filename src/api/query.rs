use anyhow::Result;

use super::models::{MatchesPageVariables, SeriesPageVariables};
use crate::domain::{LeagueWithMatches, LeagueWithSeries};

/// The remote league query, one request per call.
///
/// Implementations must return leagues in a stable order for identical
/// league windows; pagination re-requests the same window for every
/// series or match page.
#[allow(async_fn_in_trait)]
pub trait LeagueQuery {
    /// Leagues with one page of series each, every series with all its matches
    async fn leagues_with_series(
        &mut self,
        variables: &SeriesPageVariables,
    ) -> Result<Vec<LeagueWithSeries>>;

    /// Leagues with one page of matches starting at or after the requested time
    async fn leagues_with_matches(
        &mut self,
        variables: &MatchesPageVariables,
    ) -> Result<Vec<LeagueWithMatches>>;
}
