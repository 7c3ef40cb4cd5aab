use super::schema::{
    FIELD_COUNT, LEAGUE_FIELDS, LEAGUE_OFFSET, MATCH_FIELDS, MATCH_OFFSET, PLAYER_FIELDS,
    PlayerSlot, SERIES_FIELDS, SERIES_OFFSET, field_index, field_names,
};

/// A single column value; `None` is the explicit absent marker
pub type Cell = Option<String>;

pub type LeagueCells = [Cell; LEAGUE_FIELDS.len()];
pub type SeriesCells = [Cell; SERIES_FIELDS.len()];
pub type MatchCells = [Cell; MATCH_FIELDS.len()];
pub type PlayerCells = [Cell; PLAYER_FIELDS.len()];

/// Convert an optional value into a cell
pub fn cell<T: ToString>(value: Option<T>) -> Cell {
    value.map(|v| v.to_string())
}

/// One match flattened into the fixed schema, in header order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<Cell>,
}

impl FlatRow {
    /// Value of a named field; `None` for absent values and unknown names
    pub fn get(&self, field: &str) -> Option<&str> {
        field_index(field).and_then(|idx| self.cells[idx].as_deref())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// `(field, value)` pairs in schema order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        field_names()
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Option::as_deref))
    }

    /// Serialized record; absent values become empty strings
    pub fn to_record(&self) -> Vec<&str> {
        self.cells
            .iter()
            .map(|c| c.as_deref().unwrap_or(""))
            .collect()
    }
}

/// Assembles a [`FlatRow`] section by section.
///
/// Every section writes to its own column range, so no section can
/// overwrite another.
#[derive(Debug)]
pub struct RowBuilder {
    cells: Vec<Cell>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self {
            cells: vec![None; FIELD_COUNT],
        }
    }

    pub fn league(self, cells: LeagueCells) -> Self {
        self.write(LEAGUE_OFFSET, cells)
    }

    pub fn series(self, cells: SeriesCells) -> Self {
        self.write(SERIES_OFFSET, cells)
    }

    pub fn match_summary(self, cells: MatchCells) -> Self {
        self.write(MATCH_OFFSET, cells)
    }

    pub fn player(self, slot: PlayerSlot, cells: PlayerCells) -> Self {
        self.write(slot.offset(), cells)
    }

    pub fn build(self) -> FlatRow {
        FlatRow { cells: self.cells }
    }

    fn write<const N: usize>(mut self, offset: usize, cells: [Cell; N]) -> Self {
        for (target, value) in self.cells[offset..offset + N].iter_mut().zip(cells) {
            *target = value;
        }
        self
    }
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::schema::Faction;

    #[test]
    fn test_empty_row_has_every_field_absent() {
        let row = RowBuilder::new().build();
        assert_eq!(row.cells().len(), FIELD_COUNT);
        assert!(row.fields().all(|(_, value)| value.is_none()));
        assert!(row.to_record().iter().all(|v| v.is_empty()));
    }

    #[test]
    fn test_sections_land_in_their_columns() {
        let row = RowBuilder::new()
            .series([cell(Some(42)), cell(Some("BEST_OF_THREE"))])
            .player(
                PlayerSlot::new(Faction::Dire, 2).unwrap(),
                std::array::from_fn(|i| cell(Some(i))),
            )
            .build();

        assert_eq!(row.get("series_id"), Some("42"));
        assert_eq!(row.get("series_type"), Some("BEST_OF_THREE"));
        assert_eq!(row.get("dire_player_2_id"), Some("0"));
        assert_eq!(row.get("dire_player_2_networth"), Some("10"));
        assert_eq!(row.get("dire_player_1_id"), None);
        assert_eq!(row.get("dire_player_3_id"), None);
        assert_eq!(row.get("league"), None);
    }

    #[test]
    fn test_fields_follow_header_order() {
        let row = RowBuilder::new().build();
        let names: Vec<&str> = row.fields().map(|(name, _)| name).collect();
        let header: Vec<&str> = field_names().iter().map(String::as_str).collect();
        assert_eq!(names, header);
    }
}
