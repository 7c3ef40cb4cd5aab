/// Page sizes for a two-level (outer × inner) offset pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub outer_page_size: usize,
    pub inner_page_size: usize,
}

impl PaginationConfig {
    pub fn new(outer_page_size: usize, inner_page_size: usize) -> Self {
        Self {
            outer_page_size,
            inner_page_size,
        }
    }
}
