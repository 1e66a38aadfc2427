use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::field::FieldValue;
use crate::errors::{PetAdoptError, Result};
use crate::rules::validation::FormFields;

/// Links a pet to its adopter on a given date
///
/// `pet_id` and `adopter_id` are not checked against their tables unless the
/// store enforces foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adoption {
    pub adoption_id: i64,
    pub pet_id: String,
    pub adopter_id: String,
    pub adoption_date: String,
}

/// Adoption as submitted, before the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAdoption {
    pub pet_id: String,
    pub adopter_id: String,
    pub adoption_date: String,
}

impl Entity for Adoption {
    type Key = i64;
    type Draft = NewAdoption;

    const KIND: EntityKind = EntityKind::Adoption;

    fn key(&self) -> &i64 {
        &self.adoption_id
    }

    fn parse_key(raw: &str) -> Result<i64> {
        parse_assigned_key(Self::KIND, raw)
    }

    fn key_value(key: &i64) -> FieldValue {
        FieldValue::Integer(*key)
    }

    fn draft_from_form(form: &FormFields) -> Result<NewAdoption> {
        Ok(NewAdoption {
            pet_id: form.text(Self::KIND, "PetID")?,
            adopter_id: form.text(Self::KIND, "AdopterID")?,
            adoption_date: form.text(Self::KIND, "AdoptionDate")?,
        })
    }

    fn draft_values(draft: &NewAdoption) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("PetID", draft.pet_id.clone().into()),
            ("AdopterID", draft.adopter_id.clone().into()),
            ("AdoptionDate", draft.adoption_date.clone().into()),
        ]
    }

    fn resolve_key(_draft: &NewAdoption, assigned: i64) -> i64 {
        assigned
    }

    fn from_draft(draft: NewAdoption, key: i64) -> Adoption {
        Adoption {
            adoption_id: key,
            pet_id: draft.pet_id,
            adopter_id: draft.adopter_id,
            adoption_date: draft.adoption_date,
        }
    }
}

/// Parse a store-assigned integer key from a path segment
pub(crate) fn parse_assigned_key(entity: EntityKind, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|e| PetAdoptError::InvalidField {
        entity,
        field: entity.key_field().to_string(),
        reason: format!("'{}' is not an integer id: {}", raw, e),
    })
}
