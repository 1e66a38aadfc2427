use serde::{Deserialize, Serialize};

use super::adoption::parse_assigned_key;
use super::entity::{Entity, EntityKind};
use super::field::FieldValue;
use crate::errors::Result;
use crate::rules::validation::FormFields;

/// A payment recorded against an adoption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub adoption_id: i64,
    pub amount: f64,
    pub payment_date: String,
}

/// Payment as submitted, before the store assigns its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPayment {
    pub adoption_id: i64,
    pub amount: f64,
    pub payment_date: String,
}

impl Entity for Payment {
    type Key = i64;
    type Draft = NewPayment;

    const KIND: EntityKind = EntityKind::Payment;

    fn key(&self) -> &i64 {
        &self.payment_id
    }

    fn parse_key(raw: &str) -> Result<i64> {
        parse_assigned_key(Self::KIND, raw)
    }

    fn key_value(key: &i64) -> FieldValue {
        FieldValue::Integer(*key)
    }

    fn draft_from_form(form: &FormFields) -> Result<NewPayment> {
        Ok(NewPayment {
            adoption_id: form.integer(Self::KIND, "AdoptionID")?,
            amount: form.decimal(Self::KIND, "Amount")?,
            payment_date: form.text(Self::KIND, "PaymentDate")?,
        })
    }

    fn draft_values(draft: &NewPayment) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("AdoptionID", draft.adoption_id.into()),
            ("Amount", draft.amount.into()),
            ("PaymentDate", draft.payment_date.clone().into()),
        ]
    }

    fn resolve_key(_draft: &NewPayment, assigned: i64) -> i64 {
        assigned
    }

    fn from_draft(draft: NewPayment, key: i64) -> Payment {
        Payment {
            payment_id: key,
            adoption_id: draft.adoption_id,
            amount: draft.amount,
            payment_date: draft.payment_date,
        }
    }
}
