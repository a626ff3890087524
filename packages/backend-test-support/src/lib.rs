//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing:
//! unified logging initialization and error-body assertion helpers that do
//! not depend on backend types.

pub mod error_body;
pub mod test_logging;
