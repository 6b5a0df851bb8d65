mod common;
mod delimited;
pub mod schema;
mod workbook;

pub use delimited::CsvOrderParser;
pub use workbook::WorkbookOrderParser;

pub(crate) use common::{is_whole_i64, normalize_cell, HeaderIndex, OrderColumns};

#[cfg(test)]
pub(crate) use common::parse_integer;
#[cfg(test)]
pub(crate) use workbook::cell_text;
