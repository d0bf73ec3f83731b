//! Upload format detection.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Supported table formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xls,
    Xlsx,
    Xlsm,
    Ods,
}

impl SourceFormat {
    /// Parse a file extension (case-insensitive, without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xls" => Some(Self::Xls),
            "xlsx" => Some(Self::Xlsx),
            "xlsm" => Some(Self::Xlsm),
            "ods" => Some(Self::Ods),
            _ => None,
        }
    }

    /// Detect the format of `path` from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFormat {
            origin: path.display().to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn is_spreadsheet(&self) -> bool {
        !matches!(self, Self::Csv)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Xlsm => "xlsm",
            Self::Ods => "ods",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_extensions_case_insensitively() {
        assert_eq!(SourceFormat::from_extension("CSV"), Some(SourceFormat::Csv));
        assert_eq!(SourceFormat::from_extension("xlsx"), Some(SourceFormat::Xlsx));
        assert_eq!(SourceFormat::from_extension("txt"), None);
        assert!(SourceFormat::Xls.is_spreadsheet());
        assert!(!SourceFormat::Csv.is_spreadsheet());
    }

    #[test]
    fn path_without_extension_is_unsupported() {
        let result = SourceFormat::from_path(&PathBuf::from("/tmp/patients"));
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedFormat { ref extension, .. }) if extension.is_empty()
        ));
    }
}
