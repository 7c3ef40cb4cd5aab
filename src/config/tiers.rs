use serde::{Deserialize, Serialize};

/// League tier classification used by STRATZ.
///
/// The GraphQL API spells these in screaming snake case, e.g. `DPC_LEAGUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeagueTier {
    International,
    DpcQualifier,
    DpcLeagueQualifier,
    DpcLeague,
    DpcLeagueFinals,
    Major,
    Professional,
}

impl LeagueTier {
    pub const ALL: [LeagueTier; 7] = [
        LeagueTier::International,
        LeagueTier::DpcQualifier,
        LeagueTier::DpcLeagueQualifier,
        LeagueTier::DpcLeague,
        LeagueTier::DpcLeagueFinals,
        LeagueTier::Major,
        LeagueTier::Professional,
    ];

    /// Wire name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueTier::International => "INTERNATIONAL",
            LeagueTier::DpcQualifier => "DPC_QUALIFIER",
            LeagueTier::DpcLeagueQualifier => "DPC_LEAGUE_QUALIFIER",
            LeagueTier::DpcLeague => "DPC_LEAGUE",
            LeagueTier::DpcLeagueFinals => "DPC_LEAGUE_FINALS",
            LeagueTier::Major => "MAJOR",
            LeagueTier::Professional => "PROFESSIONAL",
        }
    }
}

/// Get the list of league tiers to request matches for
pub fn get_tiers() -> Vec<LeagueTier> {
    LeagueTier::ALL.to_vec()
}
