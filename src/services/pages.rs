use anyhow::Result;

use crate::api::{LeagueQuery, LeaguesRequest, MatchesPageVariables, MatchesRequest, SeriesPageVariables};
use crate::config::LeagueTier;
use crate::domain::{LeagueWithMatches, LeagueWithSeries};
use crate::pagination::{NestedCursor, NestedPage, PageSource};

impl NestedPage for LeagueWithSeries {
    fn child_count(&self) -> usize {
        self.series.len()
    }
}

impl NestedPage for LeagueWithMatches {
    fn child_count(&self) -> usize {
        self.matches.len()
    }
}

fn leagues_request(tiers: &[LeagueTier], cursor: &NestedCursor) -> LeaguesRequest {
    LeaguesRequest {
        tiers: tiers.to_vec(),
        take: cursor.take_outer(),
        skip: cursor.skip_outer(),
    }
}

/// Leagues × series pages of the full-history query
pub struct SeriesPages<'a, Q> {
    query: &'a mut Q,
    tiers: &'a [LeagueTier],
}

impl<'a, Q: LeagueQuery> SeriesPages<'a, Q> {
    pub fn new(query: &'a mut Q, tiers: &'a [LeagueTier]) -> Self {
        Self { query, tiers }
    }
}

impl<Q: LeagueQuery> PageSource for SeriesPages<'_, Q> {
    type Page = LeagueWithSeries;

    fn inner_label(&self) -> &'static str {
        "Series"
    }

    async fn fetch_page(&mut self, cursor: &NestedCursor) -> Result<Vec<LeagueWithSeries>> {
        let variables = SeriesPageVariables {
            leagues_request: leagues_request(self.tiers, cursor),
            take_series: cursor.take_inner(),
            skip_series: cursor.skip_inner(),
        };
        self.query.leagues_with_series(&variables).await
    }
}

/// Leagues × matches pages of the incremental query
pub struct MatchPages<'a, Q> {
    query: &'a mut Q,
    tiers: &'a [LeagueTier],
    start_date_time: i64,
}

impl<'a, Q: LeagueQuery> MatchPages<'a, Q> {
    pub fn new(query: &'a mut Q, tiers: &'a [LeagueTier], start_date_time: i64) -> Self {
        Self {
            query,
            tiers,
            start_date_time,
        }
    }
}

impl<Q: LeagueQuery> PageSource for MatchPages<'_, Q> {
    type Page = LeagueWithMatches;

    fn inner_label(&self) -> &'static str {
        "Matches"
    }

    async fn fetch_page(&mut self, cursor: &NestedCursor) -> Result<Vec<LeagueWithMatches>> {
        let variables = MatchesPageVariables {
            leagues_request: leagues_request(self.tiers, cursor),
            matches_request: MatchesRequest {
                start_date_time: self.start_date_time,
                take: cursor.take_inner(),
                skip: cursor.skip_inner(),
            },
        };
        self.query.leagues_with_matches(&variables).await
    }
}
