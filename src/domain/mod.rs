pub mod models;
mod progress;
mod run_mode;

pub use models::*;
pub use progress::ExtractionProgress;
pub use run_mode::{RunMode, local_epoch_seconds};
