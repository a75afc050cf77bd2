//! Export projection: field masks and CSV output.

mod csv;
mod fields;

pub use csv::{CsvExport, ExportError, export_filename, project_csv};
pub use fields::{ExportField, ExportMask};
