//! Display models for table and JSON output
//!
//! Display models turn inspection results and service state into
//! CLI-friendly rows with column names and serialization.

mod common;
mod inspection;
mod inspector;
mod transport;

pub use inspection::InspectionDisplay;
pub use inspector::InspectorDisplay;
pub use transport::TransportDisplay;
