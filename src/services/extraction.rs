use anyhow::Result;
use log::info;
use std::fs::File;
use std::path::PathBuf;

use super::pages::{MatchPages, SeriesPages};
use crate::api::{LeagueQuery, StratzClient};
use crate::config::AppConfig;
use crate::domain::{
    ExtractionProgress, LeagueWithMatches, LeagueWithSeries, RunMode, local_epoch_seconds,
};
use crate::flatten::flatten;
use crate::pagination::{PaginationConfig, PaginationSummary, paginate};
use crate::sink::{CsvSink, output_path};

/// Runs one extraction: paginate leagues, flatten every match, append rows
pub struct ExtractionService<Q> {
    config: AppConfig,
    query: Q,
}

impl ExtractionService<StratzClient> {
    pub fn new(config: AppConfig) -> Result<Self> {
        let query = StratzClient::new(&config.api)?;
        Ok(Self::with_query(config, query))
    }
}

impl<Q: LeagueQuery> ExtractionService<Q> {
    pub fn with_query(config: AppConfig, query: Q) -> Self {
        Self { config, query }
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Execute the run and return the path of the written file
    pub async fn run(&mut self, mode: &RunMode) -> Result<PathBuf> {
        info!("=== Starting extraction: {} ===", mode.describe());

        let start_epoch = match mode {
            RunMode::FullHistory => None,
            RunMode::Since(start) => Some(local_epoch_seconds(start)?),
        };

        let path = output_path(&self.config.output.dir, mode);
        let mut sink = CsvSink::create(&path)?;
        let mut progress = ExtractionProgress::new();

        let summary = match start_epoch {
            None => self.extract_full_history(&mut sink, &mut progress).await?,
            Some(epoch) => self.extract_since(epoch, &mut sink, &mut progress).await?,
        };

        sink.flush()?;
        progress.log_summary();
        info!("  → Sent {} league requests", summary.requests);
        info!("=== Extraction complete: {} ===", path.display());
        Ok(path)
    }

    async fn extract_full_history(
        &mut self,
        sink: &mut CsvSink<File>,
        progress: &mut ExtractionProgress,
    ) -> Result<PaginationSummary> {
        let pages = self.config.pages;
        let config = PaginationConfig::new(pages.leagues_per_page, pages.series_per_page);
        let mut source = SeriesPages::new(&mut self.query, &self.config.tiers);

        paginate(&mut source, config, |leagues| {
            let written = write_series_page(sink, &leagues)?;
            progress.record_page(leagues.len(), written);
            Ok(())
        })
        .await
    }

    async fn extract_since(
        &mut self,
        start_epoch: i64,
        sink: &mut CsvSink<File>,
        progress: &mut ExtractionProgress,
    ) -> Result<PaginationSummary> {
        let pages = self.config.pages;
        let config = PaginationConfig::new(pages.leagues_per_page, pages.matches_per_page);
        let mut source = MatchPages::new(&mut self.query, &self.config.tiers, start_epoch);

        paginate(&mut source, config, |leagues| {
            let written = write_matches_page(sink, &leagues)?;
            progress.record_page(leagues.len(), written);
            Ok(())
        })
        .await
    }
}

/// Flatten and append every match of a full-history page, then flush
fn write_series_page(sink: &mut CsvSink<File>, leagues: &[LeagueWithSeries]) -> Result<usize> {
    let mut written = 0;
    for entry in leagues {
        for series in &entry.series {
            for game in &series.matches {
                sink.append(&flatten(&entry.league, Some(&series.series), game))?;
                written += 1;
            }
        }
    }
    sink.flush()?;
    Ok(written)
}

/// Flatten and append every match of an incremental page, then flush
fn write_matches_page(sink: &mut CsvSink<File>, leagues: &[LeagueWithMatches]) -> Result<usize> {
    let mut written = 0;
    for entry in leagues {
        for item in &entry.matches {
            sink.append(&flatten(&entry.league, item.series.as_ref(), &item.game))?;
            written += 1;
        }
    }
    sink.flush()?;
    Ok(written)
}
