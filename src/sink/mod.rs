mod csv_sink;
mod naming;

pub use csv_sink::CsvSink;
pub use naming::{output_file_name, output_path};
