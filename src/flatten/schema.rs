//! Static field schema of a flat match row.
//!
//! The row is split into sections (league, series, match summary and ten
//! player slots). Each section owns a fixed, disjoint range of columns and
//! the header is the concatenation of all section field lists in order.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const LEAGUE_FIELDS: [&str; 6] = [
    "league",
    "league_id",
    "league_tier",
    "league_start_date_time",
    "league_end_date_time",
    "league_region",
];

pub const SERIES_FIELDS: [&str; 2] = ["series_id", "series_type"];

pub const MATCH_FIELDS: [&str; 11] = [
    "match_id",
    "match_start_date_time",
    "match_duration_seconds",
    "first_blood_time_seconds",
    "radiant_team_id",
    "radiant_team_name",
    "dire_team_id",
    "dire_team_name",
    "winner_id",
    "radiant_kills",
    "dire_kills",
];

/// Sub-fields of every player slot, suffixed to `<faction>_player_<n>_`
pub const PLAYER_FIELDS: [&str; 11] = [
    "id", "name", "hero_id", "hero", "position", "lane", "role", "kills", "deaths", "assists",
    "networth",
];

pub const SLOTS_PER_FACTION: usize = 5;

pub const LEAGUE_OFFSET: usize = 0;
pub const SERIES_OFFSET: usize = LEAGUE_OFFSET + LEAGUE_FIELDS.len();
pub const MATCH_OFFSET: usize = SERIES_OFFSET + SERIES_FIELDS.len();
pub const PLAYERS_OFFSET: usize = MATCH_OFFSET + MATCH_FIELDS.len();
pub const FIELD_COUNT: usize =
    PLAYERS_OFFSET + Faction::ALL.len() * SLOTS_PER_FACTION * PLAYER_FIELDS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Radiant,
    Dire,
}

impl Faction {
    pub const ALL: [Faction; 2] = [Faction::Radiant, Faction::Dire];

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Radiant => "radiant",
            Faction::Dire => "dire",
        }
    }

    const fn index(&self) -> usize {
        match self {
            Faction::Radiant => 0,
            Faction::Dire => 1,
        }
    }
}

/// A 1-based player slot within a faction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSlot {
    faction: Faction,
    number: usize,
}

impl PlayerSlot {
    /// Returns `None` when `number` is outside `1..=SLOTS_PER_FACTION`
    pub fn new(faction: Faction, number: usize) -> Option<Self> {
        (1..=SLOTS_PER_FACTION)
            .contains(&number)
            .then_some(Self { faction, number })
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Every slot in header order: radiant 1..=5, then dire 1..=5
    pub fn all() -> impl Iterator<Item = PlayerSlot> {
        Faction::ALL.into_iter().flat_map(|faction| {
            (1..=SLOTS_PER_FACTION).map(move |number| PlayerSlot { faction, number })
        })
    }

    pub fn prefix(&self) -> String {
        format!("{}_player_{}", self.faction.as_str(), self.number)
    }

    /// Column of the slot's first sub-field
    pub fn offset(&self) -> usize {
        let slot_index = self.faction.index() * SLOTS_PER_FACTION + (self.number - 1);
        PLAYERS_OFFSET + slot_index * PLAYER_FIELDS.len()
    }
}

// --- Compile-time disjointness checks ---

const SUMMARY_LEN: usize = PLAYERS_OFFSET;

const fn summary_fields() -> [&'static str; SUMMARY_LEN] {
    let mut out = [""; SUMMARY_LEN];
    let mut i = 0;
    while i < LEAGUE_FIELDS.len() {
        out[LEAGUE_OFFSET + i] = LEAGUE_FIELDS[i];
        i += 1;
    }
    i = 0;
    while i < SERIES_FIELDS.len() {
        out[SERIES_OFFSET + i] = SERIES_FIELDS[i];
        i += 1;
    }
    i = 0;
    while i < MATCH_FIELDS.len() {
        out[MATCH_OFFSET + i] = MATCH_FIELDS[i];
        i += 1;
    }
    out
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn starts_with(s: &str, prefix: &str) -> bool {
    let (s, prefix) = (s.as_bytes(), prefix.as_bytes());
    if s.len() < prefix.len() {
        return false;
    }
    let mut i = 0;
    while i < prefix.len() {
        if s[i] != prefix[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn has_duplicates(fields: &[&str]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        let mut j = i + 1;
        while j < fields.len() {
            if str_eq(fields[i], fields[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const fn collides_with_player_slots(fields: &[&str]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if starts_with(fields[i], "radiant_player_") || starts_with(fields[i], "dire_player_") {
            return true;
        }
        i += 1;
    }
    false
}

const _: () = assert!(!has_duplicates(&summary_fields()));
const _: () = assert!(!has_duplicates(&PLAYER_FIELDS));
const _: () = assert!(!collides_with_player_slots(&summary_fields()));
const _: () = assert!(SLOTS_PER_FACTION < 10);

// --- Runtime views ---

static HEADER: LazyLock<Vec<String>> = LazyLock::new(build_header);

static INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    HEADER
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect()
});

/// Ordered list of every column name; this is the CSV header
pub fn field_names() -> &'static [String] {
    &HEADER
}

/// Column of a field, if it belongs to the schema
pub fn field_index(name: &str) -> Option<usize> {
    INDEX.get(name).copied()
}

fn build_header() -> Vec<String> {
    let mut header: Vec<String> = summary_fields().iter().map(|f| f.to_string()).collect();

    for slot in PlayerSlot::all() {
        let prefix = slot.prefix();
        header.extend(PLAYER_FIELDS.iter().map(|f| format!("{}_{}", prefix, f)));
    }

    header
}
