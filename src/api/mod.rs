pub mod models;
mod parsers;
pub mod queries;
mod query;
mod stratz_client;

pub use models::{LeaguesRequest, MatchesPageVariables, MatchesRequest, SeriesPageVariables};
pub use query::LeagueQuery;
pub use stratz_client::StratzClient;
