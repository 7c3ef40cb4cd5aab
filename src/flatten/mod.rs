mod flattener;
pub mod row;
pub mod schema;

pub use flattener::{flatten, kill_total, winner_id};
pub use row::{Cell, FlatRow, RowBuilder};
pub use schema::{FIELD_COUNT, Faction, PlayerSlot, field_index, field_names};
