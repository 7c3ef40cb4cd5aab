pub mod extraction;
mod pages;

pub use extraction::ExtractionService;
pub use pages::{MatchPages, SeriesPages};
