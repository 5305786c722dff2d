//! Utility modules

pub mod fqdn;
pub mod log_sanitizer;
