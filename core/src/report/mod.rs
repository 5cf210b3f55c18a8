pub mod console;
pub mod csv;
pub mod summary;

pub use console::ConsoleReport;
pub use self::csv::{export_csv, DEFAULT_CSV_NAME};
pub use summary::Summary;
