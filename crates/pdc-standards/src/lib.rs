//! Schema registry for the patient data cleaner.
//!
//! Schemas and country profiles are plain data (TOML). The registry parses
//! them once, checks their invariants and hands out immutable references.
//!
//! # Example
//!
//! ```ignore
//! use pdc_standards::load_default_registry;
//!
//! let registry = load_default_registry()?;
//! let schema = registry.schema("saas")?;
//! let country = registry.country("sg")?;
//! ```

#![deny(unsafe_code)]

pub mod embedded;
pub mod error;
pub mod registry;

pub use crate::error::{Result, StandardsError};
pub use crate::registry::{
    DEFAULT_COUNTRY, DEFAULT_SCHEMA, Registry, load_default_registry, load_registry_from_path,
    parse_registry,
};
