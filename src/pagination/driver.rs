use anyhow::Result;
use log::debug;

use super::config::PaginationConfig;
use super::cursor::NestedCursor;
use super::source::{NestedPage, PageSource};

/// Counters reported once pagination is exhausted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    pub requests: usize,
    pub pages: usize,
}

/// Walk every nested page of `source`, handing each non-empty page to
/// `on_page` before the next one is requested.
///
/// Stops when the source returns no outer records. Any error from the
/// source or from `on_page` aborts the walk.
pub async fn paginate<S, F>(
    source: &mut S,
    config: PaginationConfig,
    mut on_page: F,
) -> Result<PaginationSummary>
where
    S: PageSource,
    F: FnMut(Vec<S::Page>) -> Result<()>,
{
    let mut cursor = NestedCursor::new(config);
    let mut summary = PaginationSummary::default();

    loop {
        debug!(
            "Leagues offset: {} | {} offset: {}.",
            cursor.skip_outer(),
            source.inner_label(),
            cursor.skip_inner()
        );

        let page = source.fetch_page(&cursor).await?;
        summary.requests += 1;

        if page.is_empty() {
            debug!("No more leagues there.");
            break;
        }

        let inner_has_more = page
            .iter()
            .any(|record| cursor.is_full_inner_page(record.child_count()));

        on_page(page)?;
        summary.pages += 1;

        cursor.advance(inner_has_more);
    }

    Ok(summary)
}
