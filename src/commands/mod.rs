//! CLI command implementations.
//!
//! Available commands:
//! - **report**: Evaluate the configured inputs and render a report
//! - **drivers**: Print the savings driver catalog
//! - **validate**: Check inputs and assumptions, reporting every error
//! - **init**: Write a default `.roimap.toml`

pub mod drivers;
pub mod init;
pub mod report;
pub mod validate;

pub use drivers::{list_drivers, render_drivers};
pub use init::init_config;
pub use report::{handle_report, ReportConfig};
pub use validate::{validate_inputs, ValidateConfig};
