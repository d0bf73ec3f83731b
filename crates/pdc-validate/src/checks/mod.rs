//! Per-record checks.

mod enumeration;
mod required;

pub use enumeration::check_enum;
pub use required::check_required;
