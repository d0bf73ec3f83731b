//! Embedded registry data.
//!
//! The built-in registry is compiled in with `include_str!()` so the binary
//! needs no data files at runtime. A registry file with the same layout can
//! replace it via [`crate::load_registry_from_path`].

/// Built-in schemas (`saas`) and country profiles (`sg`, `nz`, `au`).
pub const DEFAULT_REGISTRY: &str = include_str!("../data/registry.toml");

/// Origin label used in error messages for the embedded registry.
pub const DEFAULT_REGISTRY_ORIGIN: &str = "<embedded registry>";
