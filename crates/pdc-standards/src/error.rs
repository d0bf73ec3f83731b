#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML registry {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("registry {origin} defines no {kind}")]
    Empty { origin: String, kind: &'static str },

    #[error("invalid schema '{schema}': {message}")]
    InvalidSchema { schema: String, message: String },

    #[error("invalid country profile '{country}': {message}")]
    InvalidCountry { country: String, message: String },

    #[error("duplicate schema name: {name}")]
    DuplicateSchema { name: String },

    #[error("duplicate country profile name: {name}")]
    DuplicateCountry { name: String },

    #[error("unknown schema '{name}' (available: {available})")]
    UnknownSchema { name: String, available: String },

    #[error("unknown country profile '{name}' (available: {available})")]
    UnknownCountry { name: String, available: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn schema(schema: &str, message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            schema: schema.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn country(country: &str, message: impl Into<String>) -> Self {
        Self::InvalidCountry {
            country: country.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
