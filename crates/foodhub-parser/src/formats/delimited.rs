use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::errors::SchemaError;
use crate::formats::{HeaderIndex, OrderColumns};
use crate::model::OrderTable;
use crate::registry::OrderParser;

const PARSER_NAME: &str = "csv";

pub struct CsvOrderParser;

impl OrderParser for CsvOrderParser {
    fn name(&self) -> &'static str {
        PARSER_NAME
    }

    fn parse(&self, content: &[u8]) -> Result<OrderTable, SchemaError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(content);

        let headers = reader.headers().map_err(csv_error)?.clone();
        if headers.is_empty() {
            return Err(SchemaError::MissingHeader {
                parser: PARSER_NAME,
            });
        }
        let header_names: Vec<&str> = headers.iter().collect();
        let index = HeaderIndex::resolve(&header_names)?;

        let mut columns = OrderColumns::default();
        let mut record = StringRecord::new();
        let mut row = 0usize;
        while reader.read_record(&mut record).map_err(csv_error)? {
            row += 1;
            let parsed = index.parse_row(PARSER_NAME, row, |idx| {
                record.get(idx).map(|value| value.to_string())
            })?;
            columns.push(parsed);
        }

        debug!(rows = columns.len(), "parsed CSV order rows");
        columns.build()
    }
}

fn csv_error(source: csv::Error) -> SchemaError {
    SchemaError::Csv {
        parser: PARSER_NAME,
        source,
    }
}
