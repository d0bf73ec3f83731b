use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Behaviour tag attached to a schema field.
///
/// A field carries any combination of tags; normalizers select the cells they
/// act on by tag rather than by field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTag {
    /// The value must be non-null in every record.
    Required,
    /// The value is a date normalized to an ISO 8601 UTC timestamp.
    Date,
    /// The value is a phone number normalized to international form.
    Phone,
    /// The value is folded and checked against an allowed-value set.
    Enum,
}

impl FieldTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldTag::Required => "required",
            FieldTag::Date => "date",
            FieldTag::Phone => "phone",
            FieldTag::Enum => "enum",
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a free-text categorical value is folded before the allowed-set check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumFold {
    /// Trim only.
    #[default]
    Exact,
    /// Case-insensitive first-letter match against the allowed values, in order
    /// (`m...` -> `Male`, `f...` -> `Female`).
    Prefix,
    /// Title-case every word (`new zealand` -> `New Zealand`).
    Title,
}

/// Allowed canonical values for an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRule {
    #[serde(default)]
    pub fold: EnumFold,
    pub values: Vec<String>,
}

impl EnumRule {
    pub fn new(fold: EnumFold, values: &[&str]) -> Self {
        Self {
            fold,
            values: values.iter().map(|value| (*value).to_string()).collect(),
        }
    }

    /// Returns true if `value` is one of the canonical values (exact match).
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|allowed| allowed == value)
    }
}

/// A schema field and its capability tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub tags: BTreeSet<FieldTag>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_rule: Option<EnumRule>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: BTreeSet::new(),
            enum_rule: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: FieldTag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Attach an enum rule; also tags the field as [`FieldTag::Enum`].
    #[must_use]
    pub fn with_enum(mut self, rule: EnumRule) -> Self {
        self.tags.insert(FieldTag::Enum);
        self.enum_rule = Some(rule);
        self
    }

    pub fn has_tag(&self, tag: FieldTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_required(&self) -> bool {
        self.has_tag(FieldTag::Required)
    }
}

/// A named record schema. Field order is the canonical output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<FieldSpec>,
    /// Fields that jointly count as "contact details" for the combined null report.
    #[serde(default)]
    pub contact_fields: Vec<String>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
            contact_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_contact_fields(mut self, fields: &[&str]) -> Self {
        self.contact_fields = fields.iter().map(|field| (*field).to_string()).collect();
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Fields carrying `tag`, in schema order.
    pub fn fields_with(&self, tag: FieldTag) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |field| field.has_tag(tag))
    }

    pub fn required_fields(&self) -> Vec<&str> {
        self.fields_with(FieldTag::Required)
            .map(|field| field.name.as_str())
            .collect()
    }
}

/// Dialing code and expected local subscriber-number length for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Digits only, no leading `+`.
    pub dialing_code: String,
    pub local_digits: usize,
}

impl CountryProfile {
    pub fn new(name: impl Into<String>, dialing_code: impl Into<String>, local_digits: usize) -> Self {
        Self {
            name: name.into(),
            label: None,
            dialing_code: dialing_code.into(),
            local_digits,
        }
    }
}
