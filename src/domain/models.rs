use serde::{Deserialize, Deserializer, Serialize};

use crate::config::LeagueTier;

/// League as returned by the STRATZ `leagues` query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: Option<i64>,
    pub display_name: Option<String>,
    pub start_date_time: Option<i64>,
    pub end_date_time: Option<i64>,
    pub tier: Option<LeagueTier>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Best-of-N grouping of matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub series_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProSteamAccount {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamAccount {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub pro_steam_account: Option<ProSteamAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: Option<i64>,
    pub display_name: Option<String>,
}

/// Per-match player statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub is_radiant: Option<bool>,
    pub steam_account: Option<SteamAccount>,
    pub hero: Option<Hero>,
    pub kills: Option<i64>,
    pub deaths: Option<i64>,
    pub assists: Option<i64>,
    pub networth: Option<i64>,
    pub lane: Option<String>,
    pub position: Option<String>,
    pub role: Option<String>,
}

impl Player {
    pub fn is_radiant(&self) -> bool {
        self.is_radiant.unwrap_or(false)
    }

    /// Professional alias if registered, otherwise the raw account name
    pub fn display_name(&self) -> Option<&str> {
        let account = self.steam_account.as_ref()?;
        match &account.pro_steam_account {
            Some(pro) => pro.name.as_deref(),
            None => account.name.as_deref(),
        }
    }

    pub fn account_id(&self) -> Option<i64> {
        self.steam_account.as_ref().and_then(|a| a.id)
    }
}

/// One played game.
///
/// `players` is the only required field: a match without a player list is
/// a malformed response and must fail decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Option<i64>,
    pub start_date_time: Option<i64>,
    pub end_date_time: Option<i64>,
    pub duration_seconds: Option<i64>,
    pub first_blood_time: Option<i64>,
    pub radiant_team: Option<Team>,
    pub dire_team: Option<Team>,
    pub radiant_kills: Option<Vec<i64>>,
    pub dire_kills: Option<Vec<i64>>,
    pub did_radiant_win: Option<bool>,
    pub players: Vec<Player>,
    pub game_version_id: Option<i64>,
}

// --- Page shapes ---

/// Series with its matches (full-history query)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesWithMatches {
    #[serde(flatten)]
    pub series: Series,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matches: Vec<Match>,
}

/// League with one page of its series (full-history query)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueWithSeries {
    #[serde(flatten)]
    pub league: League,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub series: Vec<SeriesWithMatches>,
}

/// Match carrying its own series reference (incremental query)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchWithSeries {
    pub series: Option<Series>,
    #[serde(flatten)]
    pub game: Match,
}

/// League with one page of its matches (incremental query)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueWithMatches {
    #[serde(flatten)]
    pub league: League,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matches: Vec<MatchWithSeries>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_prefers_pro_alias() {
        let player: Player = serde_json::from_value(json!({
            "isRadiant": true,
            "steamAccount": { "id": 1, "name": "raw", "proSteamAccount": { "name": "Pro" } }
        }))
        .unwrap();
        assert_eq!(player.display_name(), Some("Pro"));

        let player: Player = serde_json::from_value(json!({
            "steamAccount": { "id": 1, "name": "raw", "proSteamAccount": null }
        }))
        .unwrap();
        assert_eq!(player.display_name(), Some("raw"));
        assert!(!player.is_radiant());

        let player: Player = serde_json::from_value(json!({ "steamAccount": null })).unwrap();
        assert_eq!(player.display_name(), None);
        assert_eq!(player.account_id(), None);
    }

    #[test]
    fn test_match_without_players_fails() {
        let result: Result<Match, _> = serde_json::from_value(json!({ "id": 10 }));
        assert!(result.is_err());

        let result: Result<Match, _> = serde_json::from_value(json!({ "id": 10, "players": null }));
        assert!(result.is_err());
    }

    #[test]
    fn test_league_with_series_decodes_nested_page() {
        let league: LeagueWithSeries = serde_json::from_value(json!({
            "id": 15728,
            "displayName": "The International 2023",
            "startDateTime": 1697068800,
            "endDateTime": 1698537600,
            "tier": "INTERNATIONAL",
            "region": "UNSET",
            "country": null,
            "series": [
                { "id": 7, "type": "BEST_OF_THREE", "matches": [ { "id": 1, "players": [] } ] },
                { "id": 8, "type": "BEST_OF_ONE", "matches": null }
            ]
        }))
        .unwrap();

        assert_eq!(league.league.id, Some(15728));
        assert_eq!(league.league.tier, Some(LeagueTier::International));
        assert_eq!(league.series.len(), 2);
        assert_eq!(league.series[0].series.series_type.as_deref(), Some("BEST_OF_THREE"));
        assert_eq!(league.series[0].matches.len(), 1);
        assert!(league.series[1].matches.is_empty());
    }

    #[test]
    fn test_league_with_matches_keeps_series_reference() {
        let league: LeagueWithMatches = serde_json::from_value(json!({
            "id": 1,
            "matches": [
                { "series": { "id": 99, "type": "BEST_OF_FIVE" }, "id": 5, "radiantKills": [1, 0], "players": [] }
            ]
        }))
        .unwrap();

        let entry = &league.matches[0];
        assert_eq!(entry.series.as_ref().and_then(|s| s.id), Some(99));
        assert_eq!(entry.game.id, Some(5));
        assert_eq!(entry.game.radiant_kills, Some(vec![1, 0]));
    }
}
