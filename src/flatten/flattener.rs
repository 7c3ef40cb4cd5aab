use crate::domain::{League, Match, Player, Series, Team};

use super::row::{FlatRow, LeagueCells, MatchCells, PlayerCells, RowBuilder, SeriesCells, cell};
use super::schema::{Faction, PlayerSlot};

/// Flatten one match and its league/series context into a [`FlatRow`].
///
/// Pure: the same input always yields the same row. Missing optional data
/// becomes an absent cell.
pub fn flatten(league: &League, series: Option<&Series>, game: &Match) -> FlatRow {
    let mut builder = RowBuilder::new()
        .league(league_cells(league))
        .series(series_cells(series))
        .match_summary(match_cells(game));

    for faction in Faction::ALL {
        let players = game
            .players
            .iter()
            .filter(|player| faction_of(player) == faction);

        for (idx, player) in players.enumerate() {
            // Slots beyond the fifth have no columns
            let Some(slot) = PlayerSlot::new(faction, idx + 1) else {
                break;
            };
            builder = builder.player(slot, player_cells(player));
        }
    }

    builder.build()
}

/// Sum of a per-event kill sequence; absent or empty sequences stay absent
pub fn kill_total(kills: Option<&[i64]>) -> Option<i64> {
    kills
        .filter(|events| !events.is_empty())
        .map(|events| events.iter().sum())
}

/// Id of the team that won, derived from the radiant win flag
pub fn winner_id(game: &Match) -> Option<i64> {
    let winner = if game.did_radiant_win.unwrap_or(false) {
        game.radiant_team.as_ref()
    } else {
        game.dire_team.as_ref()
    };
    winner.and_then(|team| team.id)
}

fn faction_of(player: &Player) -> Faction {
    if player.is_radiant() {
        Faction::Radiant
    } else {
        Faction::Dire
    }
}

fn league_cells(league: &League) -> LeagueCells {
    [
        cell(league.display_name.as_deref()),
        cell(league.id),
        cell(league.tier.map(|tier| tier.as_str())),
        cell(league.start_date_time),
        cell(league.end_date_time),
        cell(league.region.as_deref()),
    ]
}

fn series_cells(series: Option<&Series>) -> SeriesCells {
    let Some(series) = series else {
        return [None, None];
    };
    [cell(series.id), cell(series.series_type.as_deref())]
}

fn match_cells(game: &Match) -> MatchCells {
    let radiant = game.radiant_team.as_ref();
    let dire = game.dire_team.as_ref();

    [
        cell(game.id),
        cell(game.start_date_time),
        cell(game.duration_seconds),
        cell(game.first_blood_time),
        cell(radiant.and_then(|t| t.id)),
        cell(radiant.and_then(team_name)),
        cell(dire.and_then(|t| t.id)),
        cell(dire.and_then(team_name)),
        cell(winner_id(game)),
        cell(kill_total(game.radiant_kills.as_deref())),
        cell(kill_total(game.dire_kills.as_deref())),
    ]
}

fn team_name(team: &Team) -> Option<&str> {
    team.name.as_deref()
}

fn player_cells(player: &Player) -> PlayerCells {
    let hero = player.hero.as_ref();

    [
        cell(player.account_id()),
        cell(player.display_name()),
        cell(hero.and_then(|h| h.id)),
        cell(hero.and_then(|h| h.display_name.as_deref())),
        cell(player.position.as_deref()),
        cell(player.lane.as_deref()),
        cell(player.role.as_deref()),
        cell(player.kills),
        cell(player.deaths),
        cell(player.assists),
        cell(player.networth),
    ]
}
