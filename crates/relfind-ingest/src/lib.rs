pub mod dates;
pub mod discovery;
pub mod error;
pub mod release_table;
pub mod text_source;

pub use dates::parse_ga_date;
pub use discovery::{EXPORT_PREFIX, discover_release_table, list_csv_files};
pub use error::{IngestError, Result};
pub use release_table::{LoadedTable, read_release_table, read_release_table_from_reader};
pub use text_source::{read_reference_lines, read_source_lines};
