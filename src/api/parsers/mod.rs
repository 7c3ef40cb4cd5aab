mod graphql;

pub use graphql::extract_data;
