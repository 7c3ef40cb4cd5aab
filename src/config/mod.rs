pub mod settings;
pub mod tiers;

pub use settings::{ApiSettings, AppConfig, OutputSettings, PageSettings};
pub use tiers::{LeagueTier, get_tiers};
