pub mod errors;
pub mod formats;
pub mod model;
mod registry;

pub use errors::SchemaError;
pub use formats::schema::{ColumnKind, OrderColumn, ORDER_COLUMNS};
pub use model::{LoadedOrders, OrderRow, OrderTable, SourceInfo};
pub use registry::{load_orders, parse_csv, parse_workbook, parser_for_path, OrderParser};
