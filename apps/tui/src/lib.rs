// Export our modules for use in binaries and tests
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod tooltip;

pub use config::{ChartConfig, SourceConfig};
pub use data::{DataSource, LoadError};
pub use domain::{Dataset, Record};
pub use tooltip::{PointerEvent, Tooltip};
