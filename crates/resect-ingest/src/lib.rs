pub mod case_record;
pub mod cell;
pub mod csv_table;
pub mod embedded;
pub mod error;
pub mod template;

pub use case_record::{
    build_case_collection, build_case_record, is_case_row, read_case_collection,
    read_case_collection_from_path,
};
pub use cell::{CellValue, RawRow, format_numeric};
pub use csv_table::{IngestOptions, read_raw_rows, read_raw_rows_from_path};
pub use embedded::decode_embedded_object;
pub use error::{IngestError, Result};
pub use template::{CASE_RECORD_TEMPLATE, CODED_FINDING_TEMPLATE, Template, normalize_to_template};
