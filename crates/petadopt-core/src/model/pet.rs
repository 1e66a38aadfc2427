use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::field::FieldValue;
use crate::errors::Result;
use crate::rules::validation::FormFields;

/// A pet in the shelter's care
///
/// `age` is stored as submitted; negative values are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub pet_id: String,
    pub pet_name: String,
    pub breed: String,
    pub age: i64,
    pub health_status: String,
}

impl Entity for Pet {
    type Key = String;
    type Draft = Pet;

    const KIND: EntityKind = EntityKind::Pet;

    fn key(&self) -> &String {
        &self.pet_id
    }

    fn parse_key(raw: &str) -> Result<String> {
        Ok(raw.to_string())
    }

    fn key_value(key: &String) -> FieldValue {
        FieldValue::Text(key.clone())
    }

    fn draft_from_form(form: &FormFields) -> Result<Pet> {
        Ok(Pet {
            pet_id: form.text(Self::KIND, "PetID")?,
            pet_name: form.text(Self::KIND, "PetName")?,
            breed: form.text(Self::KIND, "Breed")?,
            age: form.integer(Self::KIND, "Age")?,
            health_status: form.text(Self::KIND, "HealthStatus")?,
        })
    }

    fn draft_values(draft: &Pet) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("PetID", draft.pet_id.clone().into()),
            ("PetName", draft.pet_name.clone().into()),
            ("Breed", draft.breed.clone().into()),
            ("Age", draft.age.into()),
            ("HealthStatus", draft.health_status.clone().into()),
        ]
    }

    fn resolve_key(draft: &Pet, _assigned: i64) -> String {
        draft.pet_id.clone()
    }

    fn from_draft(draft: Pet, _key: String) -> Pet {
        draft
    }
}
