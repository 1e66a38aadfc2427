use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::field::FieldValue;
use crate::errors::Result;
use crate::rules::validation::FormFields;

/// A person adopting one or more pets
///
/// `contact` and `address` are personal data; wrap them in
/// `petadopt_core_types::Sensitive` before logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adopter {
    pub adopter_id: String,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Adopter {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Adopter {
    type Key = String;
    type Draft = Adopter;

    const KIND: EntityKind = EntityKind::Adopter;

    fn key(&self) -> &String {
        &self.adopter_id
    }

    fn parse_key(raw: &str) -> Result<String> {
        Ok(raw.to_string())
    }

    fn key_value(key: &String) -> FieldValue {
        FieldValue::Text(key.clone())
    }

    fn draft_from_form(form: &FormFields) -> Result<Adopter> {
        Ok(Adopter {
            adopter_id: form.text(Self::KIND, "AdopterID")?,
            first_name: form.text(Self::KIND, "FirstName")?,
            last_name: form.text(Self::KIND, "LastName")?,
            contact: form.text(Self::KIND, "Contact")?,
            address: form.text(Self::KIND, "Address")?,
            city: form.text(Self::KIND, "City")?,
            state: form.text(Self::KIND, "State")?,
            country: form.text(Self::KIND, "Country")?,
        })
    }

    fn draft_values(draft: &Adopter) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("AdopterID", draft.adopter_id.clone().into()),
            ("FirstName", draft.first_name.clone().into()),
            ("LastName", draft.last_name.clone().into()),
            ("Contact", draft.contact.clone().into()),
            ("Address", draft.address.clone().into()),
            ("City", draft.city.clone().into()),
            ("State", draft.state.clone().into()),
            ("Country", draft.country.clone().into()),
        ]
    }

    fn resolve_key(draft: &Adopter, _assigned: i64) -> String {
        draft.adopter_id.clone()
    }

    fn from_draft(draft: Adopter, _key: String) -> Adopter {
        draft
    }
}
