use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use crate::errors::SchemaError;
use crate::formats::{is_whole_i64, normalize_cell, HeaderIndex, OrderColumns};
use crate::model::OrderTable;
use crate::registry::OrderParser;

const PARSER_NAME: &str = "workbook";

/// Reads the first worksheet of an Excel workbook; the first row is the header.
pub struct WorkbookOrderParser;

impl OrderParser for WorkbookOrderParser {
    fn name(&self) -> &'static str {
        PARSER_NAME
    }

    fn parse(&self, content: &[u8]) -> Result<OrderTable, SchemaError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(content))
            .map_err(|err| workbook_error(err.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| workbook_error("workbook has no worksheets"))?
            .map_err(|err| workbook_error(err.to_string()))?;

        let mut rows = range.rows();
        let header_cells = rows.next().ok_or(SchemaError::MissingHeader {
            parser: PARSER_NAME,
        })?;
        let header_names: Vec<String> = header_cells
            .iter()
            .map(|cell| cell_text(cell).unwrap_or_default())
            .collect();
        let index = HeaderIndex::resolve(&header_names)?;

        let mut columns = OrderColumns::default();
        for (offset, cells) in rows.enumerate() {
            if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
                continue;
            }
            let parsed = index.parse_row(PARSER_NAME, offset + 1, |idx| {
                cells.get(idx).and_then(cell_text)
            })?;
            columns.push(parsed);
        }

        debug!(rows = columns.len(), "parsed workbook order rows");
        columns.build()
    }
}

/// Whole-number floats are written without a fractional part so that
/// integer columns stored as Excel numbers load as integers. Floats outside
/// the i64 range keep their decimal form and fail integer parsing later.
pub(crate) fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) if is_whole_i64(*value) => {
            format!("{}", *value as i64)
        }
        Data::Float(value) => value.to_string(),
        other => other.to_string(),
    };
    normalize_cell(text)
}

fn workbook_error(message: impl Into<String>) -> SchemaError {
    SchemaError::Workbook {
        parser: PARSER_NAME,
        message: message.into(),
    }
}
