use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::SchemaError;
use crate::formats::{CsvOrderParser, WorkbookOrderParser};
use crate::model::{LoadedOrders, OrderTable, SourceInfo};

pub trait OrderParser {
    fn name(&self) -> &'static str;
    fn parse(&self, content: &[u8]) -> Result<OrderTable, SchemaError>;
}

const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "xlsm", "xlsb"];

/// Picks a parser from the file extension. Anything that is not a workbook is read as CSV.
pub fn parser_for_path(path: &Path) -> &'static dyn OrderParser {
    let is_workbook = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false);

    if is_workbook {
        &WorkbookOrderParser
    } else {
        &CsvOrderParser
    }
}

/// Reads and validates the order file at `path`.
pub fn load_orders(path: &Path) -> Result<LoadedOrders, SchemaError> {
    let content = fs::read(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parser = parser_for_path(path);
    let orders = parser.parse(&content)?;
    let source = SourceInfo::new(path, parser.name(), &content);

    info!(
        path = %source.path,
        format = parser.name(),
        rows = orders.height(),
        blake3 = %source.blake3,
        "loaded order data"
    );

    Ok(LoadedOrders { source, orders })
}

pub fn parse_csv(content: &[u8]) -> Result<OrderTable, SchemaError> {
    CsvOrderParser.parse(content)
}

pub fn parse_workbook(content: &[u8]) -> Result<OrderTable, SchemaError> {
    WorkbookOrderParser.parse(content)
}
