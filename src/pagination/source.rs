use anyhow::Result;

use super::cursor::NestedCursor;

/// An outer record that carries one page of children
pub trait NestedPage {
    fn child_count(&self) -> usize;
}

/// Something that can serve one nested page per cursor position.
///
/// Implementations must return outer records in a stable order for a given
/// outer offset, since the same outer window is requested again for every
/// inner page.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    type Page: NestedPage;

    /// Name of the inner collection, used in log lines
    fn inner_label(&self) -> &'static str;

    async fn fetch_page(&mut self, cursor: &NestedCursor) -> Result<Vec<Self::Page>>;
}
