mod config;
mod cursor;
mod driver;
mod source;

pub use config::PaginationConfig;
pub use cursor::NestedCursor;
pub use driver::{PaginationSummary, paginate};
pub use source::{NestedPage, PageSource};
