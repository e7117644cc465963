//! Request models and their CLI display forms
//!
//! Documents and requests are owned by the tab service; inspections only
//! read them.

pub mod auth;
pub mod display;
pub mod document;
pub mod request;

pub use auth::{AuthConfig, AuthType};
pub use display::{InspectionDisplay, InspectorDisplay, TransportDisplay};
pub use document::RequestDocument;
pub use request::Request;
