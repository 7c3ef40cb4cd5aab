use std::path::{Path, PathBuf};

use crate::domain::RunMode;

const DATA_FILE_PREFIX: &str = "dota2_matches";
const DATA_FILE_EXTENSION: &str = "csv";

/// `dota2_matches_init.csv` or `dota2_matches_<YYYY-MM-DD_HH-MM-SS>.csv`
pub fn output_file_name(mode: &RunMode) -> String {
    format!(
        "{}_{}.{}",
        DATA_FILE_PREFIX,
        mode.run_identifier(),
        DATA_FILE_EXTENSION
    )
}

pub fn output_path(dir: &Path, mode: &RunMode) -> PathBuf {
    dir.join(output_file_name(mode))
}
