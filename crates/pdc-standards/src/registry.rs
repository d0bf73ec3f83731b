use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use pdc_model::{CountryProfile, FieldTag, Schema};

use crate::embedded::{DEFAULT_REGISTRY, DEFAULT_REGISTRY_ORIGIN};
use crate::error::{Result, StandardsError};

/// Schema used when the caller does not pick one.
pub const DEFAULT_SCHEMA: &str = "saas";

/// Country profile used when the caller does not pick one.
pub const DEFAULT_COUNTRY: &str = "sg";

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default, rename = "schema")]
    schemas: Vec<Schema>,
    #[serde(default, rename = "country")]
    countries: Vec<CountryProfile>,
}

/// Validated, immutable set of schemas and country profiles.
#[derive(Debug, Clone)]
pub struct Registry {
    schemas: Vec<Schema>,
    countries: Vec<CountryProfile>,
}

impl Registry {
    /// Build a registry from already-constructed definitions, checking every invariant.
    pub fn new(schemas: Vec<Schema>, countries: Vec<CountryProfile>) -> Result<Self> {
        Self::validated(schemas, countries, "<in-memory registry>")
    }

    fn validated(
        schemas: Vec<Schema>,
        countries: Vec<CountryProfile>,
        origin: &str,
    ) -> Result<Self> {
        if schemas.is_empty() {
            return Err(StandardsError::Empty {
                origin: origin.to_string(),
                kind: "schemas",
            });
        }
        if countries.is_empty() {
            return Err(StandardsError::Empty {
                origin: origin.to_string(),
                kind: "country profiles",
            });
        }

        let mut seen = BTreeSet::new();
        for schema in &schemas {
            validate_schema(schema)?;
            if !seen.insert(schema.name.as_str()) {
                return Err(StandardsError::DuplicateSchema {
                    name: schema.name.clone(),
                });
            }
        }

        let mut seen = BTreeSet::new();
        for country in &countries {
            validate_country(country)?;
            if !seen.insert(country.name.as_str()) {
                return Err(StandardsError::DuplicateCountry {
                    name: country.name.clone(),
                });
            }
        }

        Ok(Self { schemas, countries })
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    pub fn countries(&self) -> &[CountryProfile] {
        &self.countries
    }

    pub fn schema_names(&self) -> Vec<&str> {
        self.schemas.iter().map(|schema| schema.name.as_str()).collect()
    }

    pub fn country_names(&self) -> Vec<&str> {
        self.countries
            .iter()
            .map(|country| country.name.as_str())
            .collect()
    }

    /// Look up a schema by exact name.
    pub fn schema(&self, name: &str) -> Result<&Schema> {
        self.schemas
            .iter()
            .find(|schema| schema.name == name)
            .ok_or_else(|| StandardsError::UnknownSchema {
                name: name.to_string(),
                available: self.schema_names().join(", "),
            })
    }

    /// Look up a country profile by name (case-insensitive).
    pub fn country(&self, name: &str) -> Result<&CountryProfile> {
        let wanted = name.trim();
        self.countries
            .iter()
            .find(|country| country.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StandardsError::UnknownCountry {
                name: name.to_string(),
                available: self.country_names().join(", "),
            })
    }
}

/// Parse and validate a registry from TOML text.
///
/// `origin` names the source in error messages (a path or a label).
pub fn parse_registry(text: &str, origin: &str) -> Result<Registry> {
    let file: RegistryFile = toml::from_str(text).map_err(|source| StandardsError::Toml {
        origin: origin.to_string(),
        source,
    })?;
    Registry::validated(file.schemas, file.countries, origin)
}

/// Load the registry compiled into the binary.
pub fn load_default_registry() -> Result<Registry> {
    parse_registry(DEFAULT_REGISTRY, DEFAULT_REGISTRY_ORIGIN)
}

/// Load a registry from a TOML file on disk.
pub fn load_registry_from_path(path: &Path) -> Result<Registry> {
    let text = std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    parse_registry(&text, &path.display().to_string())
}

fn validate_schema(schema: &Schema) -> Result<()> {
    let name = schema.name.as_str();
    if name.trim().is_empty() {
        return Err(StandardsError::schema(name, "schema name is empty"));
    }
    if schema.fields.is_empty() {
        return Err(StandardsError::schema(name, "schema has no fields"));
    }

    let mut field_names = BTreeSet::new();
    for field in &schema.fields {
        if field.name.trim().is_empty() {
            return Err(StandardsError::schema(name, "field name is empty"));
        }
        if !field_names.insert(field.name.as_str()) {
            return Err(StandardsError::schema(
                name,
                format!("duplicate field '{}'", field.name),
            ));
        }
        if field.has_tag(FieldTag::Date) && field.has_tag(FieldTag::Phone) {
            return Err(StandardsError::schema(
                name,
                format!("field '{}' is tagged both date and phone", field.name),
            ));
        }
        match (&field.enum_rule, field.has_tag(FieldTag::Enum)) {
            (None, true) => {
                return Err(StandardsError::schema(
                    name,
                    format!("enum field '{}' has no allowed values", field.name),
                ));
            }
            (Some(_), false) => {
                return Err(StandardsError::schema(
                    name,
                    format!("field '{}' has allowed values but no enum tag", field.name),
                ));
            }
            (Some(rule), true) => {
                if rule.values.is_empty() || rule.values.iter().any(|v| v.trim().is_empty()) {
                    return Err(StandardsError::schema(
                        name,
                        format!("enum field '{}' has an empty or blank allowed value", field.name),
                    ));
                }
            }
            (None, false) => {}
        }
    }

    for contact in &schema.contact_fields {
        if !field_names.contains(contact.as_str()) {
            return Err(StandardsError::schema(
                name,
                format!("contact field '{contact}' is not a schema field"),
            ));
        }
    }
    Ok(())
}

fn validate_country(country: &CountryProfile) -> Result<()> {
    let name = country.name.as_str();
    if name.trim().is_empty() {
        return Err(StandardsError::country(name, "country name is empty"));
    }
    if country.dialing_code.is_empty()
        || !country.dialing_code.chars().all(|ch| ch.is_ascii_digit())
    {
        return Err(StandardsError::country(
            name,
            format!("dialing code '{}' must be digits only", country.dialing_code),
        ));
    }
    if country.local_digits == 0 {
        return Err(StandardsError::country(
            name,
            "local digit count must be positive",
        ));
    }
    Ok(())
}
