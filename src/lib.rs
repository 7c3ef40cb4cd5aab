pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod flatten;
pub mod http;
pub mod pagination;
pub mod rate_limiter;
pub mod services;
pub mod sink;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::{Cli, normalize_args};

use crate::config::AppConfig;
use crate::domain::RunMode;
use crate::services::ExtractionService;

pub fn interpret() -> RunMode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    cli.run_mode(Local::now().naive_local())
}

pub fn handle_extract(mode: &RunMode) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let config = AppConfig::from_env()?;
        let mut service = ExtractionService::new(config)?;
        service.run(mode).await.map(|_| ())
    })
}
