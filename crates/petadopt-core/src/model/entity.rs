use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{FieldChange, FieldType, FieldValue};
use crate::errors::Result;
use crate::rules::validation::FormFields;

/// The four record types held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Pet,
    Adopter,
    Adoption,
    Payment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Pet,
        EntityKind::Adopter,
        EntityKind::Adoption,
        EntityKind::Payment,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Pet => "Pet",
            EntityKind::Adopter => "Adopter",
            EntityKind::Adoption => "Adoption",
            EntityKind::Payment => "Payment",
        }
    }

    /// Route fragment used in `/add_{slug}`, `/edit_{slug}/{id}`, `/delete_{slug}/{id}`
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Pet => "pet",
            EntityKind::Adopter => "adopter",
            EntityKind::Adoption => "adoption",
            EntityKind::Payment => "payment",
        }
    }

    /// Backing table
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Pet => "pets",
            EntityKind::Adopter => "adopters",
            EntityKind::Adoption => "adoptions",
            EntityKind::Payment => "payments",
        }
    }

    /// Listing path every write redirects to
    pub fn list_path(&self) -> &'static str {
        match self {
            EntityKind::Pet => "/pets",
            EntityKind::Adopter => "/adopters",
            EntityKind::Adoption => "/adoptions",
            EntityKind::Payment => "/payments",
        }
    }

    /// Primary key column
    pub fn key_field(&self) -> &'static str {
        match self {
            EntityKind::Pet => "PetID",
            EntityKind::Adopter => "AdopterID",
            EntityKind::Adoption => "AdoptionID",
            EntityKind::Payment => "PaymentID",
        }
    }

    /// True when the store assigns the key on insert
    pub fn key_is_assigned(&self) -> bool {
        matches!(self, EntityKind::Adoption | EntityKind::Payment)
    }

    /// All columns in table order, key first
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Pet => &["PetID", "PetName", "Breed", "Age", "HealthStatus"],
            EntityKind::Adopter => &[
                "AdopterID",
                "FirstName",
                "LastName",
                "Contact",
                "Address",
                "City",
                "State",
                "Country",
            ],
            EntityKind::Adoption => &["AdoptionID", "PetID", "AdopterID", "AdoptionDate"],
            EntityKind::Payment => &["PaymentID", "AdoptionID", "Amount", "PaymentDate"],
        }
    }

    /// Fields an add form must carry
    pub fn create_fields(&self) -> &'static [&'static str] {
        if self.key_is_assigned() {
            self.editable_fields()
        } else {
            self.columns()
        }
    }

    /// Fields an edit may overwrite (every column except the key)
    pub fn editable_fields(&self) -> &'static [&'static str] {
        &self.columns()[1..]
    }

    /// Declared type of a column, `None` for unknown names
    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        if !self.columns().contains(&field) {
            return None;
        }
        let ty = match (self, field) {
            (EntityKind::Pet, "Age") => FieldType::Integer,
            (EntityKind::Adoption, "AdoptionID") => FieldType::Integer,
            (EntityKind::Payment, "PaymentID" | "AdoptionID") => FieldType::Integer,
            (EntityKind::Payment, "Amount") => FieldType::Decimal,
            _ => FieldType::Text,
        };
        Some(ty)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behaviour shared by every record type
///
/// `Draft` is what an add form produces: the full record for entities with
/// caller-chosen keys, the record minus its key for auto-assigned ones.
pub trait Entity: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    type Key: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static;
    type Draft: Clone + fmt::Debug + Send + Sync + 'static;

    const KIND: EntityKind;

    fn key(&self) -> &Self::Key;

    /// Parse a key taken from a request path
    fn parse_key(raw: &str) -> Result<Self::Key>;

    fn key_value(key: &Self::Key) -> FieldValue;

    /// Validate an add form into a draft
    fn draft_from_form(form: &FormFields) -> Result<Self::Draft>;

    /// Columns and values written by an insert, in table order
    fn draft_values(draft: &Self::Draft) -> Vec<(&'static str, FieldValue)>;

    /// Key of a freshly inserted draft; `assigned` is the store-generated id
    fn resolve_key(draft: &Self::Draft, assigned: i64) -> Self::Key;

    fn from_draft(draft: Self::Draft, key: Self::Key) -> Self;

    /// Validate an edit form: every editable field must be present and typed
    fn changes_from_form(form: &FormFields) -> Result<Vec<FieldChange>> {
        Self::KIND
            .editable_fields()
            .iter()
            .map(|field| {
                let ty = Self::KIND.field_type(field).unwrap_or(FieldType::Text);
                let value = form.typed(Self::KIND, field, ty)?;
                Ok(FieldChange::new(*field, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_fields_exclude_key() {
        for kind in EntityKind::ALL {
            assert!(!kind.editable_fields().contains(&kind.key_field()));
            assert_eq!(kind.columns()[0], kind.key_field());
        }
    }

    #[test]
    fn test_create_fields_include_key_only_when_caller_chosen() {
        assert!(EntityKind::Pet.create_fields().contains(&"PetID"));
        assert!(EntityKind::Adopter.create_fields().contains(&"AdopterID"));
        assert!(!EntityKind::Adoption.create_fields().contains(&"AdoptionID"));
        assert!(!EntityKind::Payment.create_fields().contains(&"PaymentID"));
        assert_eq!(EntityKind::Adopter.create_fields().len(), 8);
    }

    #[test]
    fn test_field_types() {
        assert_eq!(EntityKind::Pet.field_type("Age"), Some(FieldType::Integer));
        assert_eq!(
            EntityKind::Payment.field_type("Amount"),
            Some(FieldType::Decimal)
        );
        assert_eq!(EntityKind::Pet.field_type("Breed"), Some(FieldType::Text));
        assert_eq!(EntityKind::Pet.field_type("Amount"), None);
    }

    #[test]
    fn test_paths_follow_slug() {
        assert_eq!(EntityKind::Adoption.list_path(), "/adoptions");
        assert_eq!(EntityKind::Payment.slug(), "payment");
        assert_eq!(EntityKind::Adopter.table(), "adopters");
    }
}
