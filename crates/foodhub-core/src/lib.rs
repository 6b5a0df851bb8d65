pub mod aggregate;
pub mod charts;
pub mod cleaning;
pub mod describe;
pub mod error;
pub mod filters;
pub mod metrics;
pub mod promotions;
pub mod ranking;
pub mod report;
pub mod settings;
pub mod weekdays;

pub use cleaning::{clean_orders, CleanedOrders};
pub use error::{ReportError, Result};
pub use filters::OrderFilter;
pub use report::{build_report, Report};
pub use settings::ReportSettings;
