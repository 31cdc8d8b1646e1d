//! Filter definitions and requests

pub mod definition;
pub mod request;

pub use definition::FilterDefinition;
pub use request::{FilterRequest, RawFilterDefinition, RawFilterRequest};
