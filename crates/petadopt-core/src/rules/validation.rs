//! Form validation
//!
//! Submitted forms are plain field-value maps. The only checks are that a
//! required field is present and, for integer and decimal columns, that its
//! text parses. Text values are kept verbatim: an empty string counts as
//! present.

use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::errors::{PetAdoptError, Result};
use crate::model::{EntityKind, FieldType, FieldValue};

/// Field-value pairs from a submitted form
///
/// When a name is submitted more than once the first value is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for FormFields {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = FormFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of form field names to values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<FormFields, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = HashMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    fields.entry(name).or_insert(value);
                }
                Ok(FormFields { fields })
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Required text field
    pub fn text(&self, entity: EntityKind, field: &str) -> Result<String> {
        self.get(field)
            .map(str::to_string)
            .ok_or_else(|| PetAdoptError::MissingField {
                entity,
                field: field.to_string(),
            })
    }

    /// Required integer field
    pub fn integer(&self, entity: EntityKind, field: &str) -> Result<i64> {
        let raw = self.text(entity, field)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|e| PetAdoptError::InvalidField {
                entity,
                field: field.to_string(),
                reason: format!("'{}' is not an integer: {}", raw, e),
            })
    }

    /// Required decimal field; rejects NaN and infinities
    pub fn decimal(&self, entity: EntityKind, field: &str) -> Result<f64> {
        let raw = self.text(entity, field)?;
        let invalid = |reason: String| PetAdoptError::InvalidField {
            entity,
            field: field.to_string(),
            reason,
        };
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(format!("'{}' is not a decimal: {}", raw, e)))?;
        if !value.is_finite() {
            return Err(invalid(format!("'{}' is not a finite decimal", raw)));
        }
        Ok(value)
    }

    /// Required field coerced to its declared type
    pub fn typed(&self, entity: EntityKind, field: &str, ty: FieldType) -> Result<FieldValue> {
        match ty {
            FieldType::Text => self.text(entity, field).map(FieldValue::Text),
            FieldType::Integer => self.integer(entity, field).map(FieldValue::Integer),
            FieldType::Decimal => self.decimal(entity, field).map(FieldValue::Real),
        }
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error as ValueError, MapDeserializer};

    #[test]
    fn test_repeated_name_keeps_first_value() {
        let pairs = vec![("PetID", "P1"), ("PetName", "Rex"), ("PetID", "P2")];
        let form =
            FormFields::deserialize(MapDeserializer::<_, ValueError>::new(pairs.into_iter()))
                .unwrap();
        assert_eq!(form.len(), 2);
        assert_eq!(form.get("PetID"), Some("P1"));
        assert_eq!(form.get("PetName"), Some("Rex"));
    }

    #[test]
    fn test_empty_string_counts_as_present() {
        let form = FormFields::new().with("Breed", "");
        assert_eq!(form.text(EntityKind::Pet, "Breed").unwrap(), "");
    }

    #[test]
    fn test_integer_tolerates_surrounding_whitespace() {
        let form = FormFields::new().with("Age", " 7 ");
        assert_eq!(form.integer(EntityKind::Pet, "Age").unwrap(), 7);
    }

    #[test]
    fn test_decimal_rejects_infinity() {
        let form = FormFields::new().with("Amount", "inf");
        assert!(matches!(
            form.decimal(EntityKind::Payment, "Amount"),
            Err(PetAdoptError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_missing_integer_reports_missing_not_invalid() {
        let form = FormFields::new();
        assert!(matches!(
            form.integer(EntityKind::Pet, "Age"),
            Err(PetAdoptError::MissingField { .. })
        ));
    }
}
