use super::config::PaginationConfig;

/// Offsets of a nested pagination: leagues outside, series or matches inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedCursor {
    skip_outer: usize,
    skip_inner: usize,
    config: PaginationConfig,
}

impl NestedCursor {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            skip_outer: 0,
            skip_inner: 0,
            config,
        }
    }

    pub fn skip_outer(&self) -> usize {
        self.skip_outer
    }

    pub fn take_outer(&self) -> usize {
        self.config.outer_page_size
    }

    pub fn skip_inner(&self) -> usize {
        self.skip_inner
    }

    pub fn take_inner(&self) -> usize {
        self.config.inner_page_size
    }

    /// A full inner page means more children may remain for that parent
    pub fn is_full_inner_page(&self, child_count: usize) -> bool {
        child_count == self.config.inner_page_size
    }

    /// Move to the next page.
    ///
    /// While any parent of the current window may have more children the
    /// outer offset is held and the inner offset advances; otherwise the
    /// inner offset resets and the outer window moves on.
    pub fn advance(&mut self, inner_has_more: bool) {
        if inner_has_more {
            self.skip_inner += self.config.inner_page_size;
        } else {
            self.skip_inner = 0;
            self.skip_outer += self.config.outer_page_size;
        }
    }
}
