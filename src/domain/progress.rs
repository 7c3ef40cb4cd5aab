use log::info;

/// Track what an extraction run has written so far
#[derive(Debug, Default)]
pub struct ExtractionProgress {
    pages: usize,
    leagues: usize,
    matches: usize,
}

impl ExtractionProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_page(&mut self, leagues: usize, matches: usize) {
        self.pages += 1;
        self.leagues += leagues;
        self.matches += matches;
        self.log_progress();
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn log_summary(&self) {
        info!(
            "  → Wrote {} matches from {} league pages ({} league entries)",
            self.matches, self.pages, self.leagues
        );
    }

    fn log_progress(&self) {
        if is_milestone(self.pages) {
            info!(
                "  → Progress: {} pages, {} matches written",
                self.pages, self.matches
            );
        }
    }
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}
