//! GraphQL documents sent to STRATZ.

pub const SERIES_BY_LEAGUE_QUERY: &str = r#"
    query SeriesByLeagueQuery($leaguesRequest: LeagueRequestType!,
                              $takeSeries: Int!,
                              $skipSeries: Int!) {
        leagues(request: $leaguesRequest) {
            id
            displayName
            startDateTime
            endDateTime
            tier
            region
            country
            series(take: $takeSeries, skip: $skipSeries) {
                id
                type
                matches {
                    ...MatchFields
                }
            }
        }
    }
"#;

pub const MATCHES_BY_LEAGUE_QUERY: &str = r#"
    query MatchesByLeagueQuery($leaguesRequest: LeagueRequestType!,
                               $matchesRequest: LeagueMatchesRequestType!) {
        leagues(request: $leaguesRequest) {
            id
            displayName
            startDateTime
            endDateTime
            tier
            region
            country
            matches(request: $matchesRequest) {
                series {
                    id
                    type
                }
                ...MatchFields
            }
        }
    }
"#;

pub const MATCH_FIELDS_FRAGMENT: &str = r#"
    fragment MatchFields on MatchType {
        id
        startDateTime
        endDateTime
        durationSeconds
        radiantTeam {
            id
            name
        }
        direTeam {
            id
            name
        }
        firstBloodTime
        radiantKills
        direKills
        didRadiantWin
        players {
            isRadiant
            steamAccount {
                id
                name
                proSteamAccount {
                    name
                }
            }
            hero {
                id
                displayName
            }
            kills
            deaths
            assists
            networth
            lane
            position
            role
        }
        gameVersionId
    }
"#;

/// Full document for a query that spreads `MatchFields`
pub fn with_match_fields(query: &str) -> String {
    format!("{}{}", query, MATCH_FIELDS_FRAGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_include_fragment() {
        for query in [SERIES_BY_LEAGUE_QUERY, MATCHES_BY_LEAGUE_QUERY] {
            let document = with_match_fields(query);
            assert!(document.contains("...MatchFields"));
            assert!(document.contains("fragment MatchFields on MatchType"));
        }
    }
}
