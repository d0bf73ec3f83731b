use serde::{Deserialize, Serialize};

/// Partition of a table's columns against a schema.
///
/// `present_expected` and `missing_expected` follow schema order;
/// `unexpected_present` follows input order with duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReconciliation {
    pub present_expected: Vec<String>,
    pub missing_expected: Vec<String>,
    pub unexpected_present: Vec<String>,
}

impl FieldReconciliation {
    /// True when the input columns match the schema exactly.
    pub fn is_exact(&self) -> bool {
        self.missing_expected.is_empty() && self.unexpected_present.is_empty()
    }
}
