//! Row mapping for each record type
//!
//! Table, key column and column order come from `EntityKind`; this module
//! only knows how to read a row back into the typed struct and how to hand
//! typed values to SQLite.

use petadopt_core::{Adopter, Adoption, Entity, FieldValue, Payment, Pet};
use rusqlite::types::Value;
use rusqlite::Row;

/// A domain entity the SQLite repository can read
///
/// Rows are selected with `EntityKind::columns()` in order.
pub trait Record: Entity {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Convert a driver-independent value into a SQLite value
pub fn to_sql_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::Text(s.clone()),
        FieldValue::Integer(i) => Value::Integer(*i),
        FieldValue::Real(f) => Value::Real(*f),
    }
}

impl Record for Pet {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Pet {
            pet_id: row.get(0)?,
            pet_name: row.get(1)?,
            breed: row.get(2)?,
            age: row.get(3)?,
            health_status: row.get(4)?,
        })
    }
}

impl Record for Adopter {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Adopter {
            adopter_id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            contact: row.get(3)?,
            address: row.get(4)?,
            city: row.get(5)?,
            state: row.get(6)?,
            country: row.get(7)?,
        })
    }
}

impl Record for Adoption {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Adoption {
            adoption_id: row.get(0)?,
            pet_id: row.get(1)?,
            adopter_id: row.get(2)?,
            adoption_date: row.get(3)?,
        })
    }
}

impl Record for Payment {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Payment {
            payment_id: row.get(0)?,
            adoption_id: row.get(1)?,
            amount: row.get(2)?,
            payment_date: row.get(3)?,
        })
    }
}
