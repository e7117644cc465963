//! Built-in inspectors

mod authorization;
mod header;

pub use authorization::AuthorizationInspector;
pub use header::HeaderInspector;
