//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, SeverityArg};
pub use global::GlobalOptions;
