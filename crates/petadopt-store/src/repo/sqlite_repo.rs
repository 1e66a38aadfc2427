//! SQLite repository implementation
//!
//! Generic create/read/update/delete addressed by primary key. Every call is
//! one statement committed on its own; nothing spans entities.

use crate::errors::{classify_write_error, from_rusqlite, Result};
use crate::repo::record::{to_sql_value, Record};
use petadopt_core::model::FieldType;
use petadopt_core::{Entity, ExError, FieldChange, FieldValue, PetAdoptError};
use rusqlite::{params_from_iter, Connection, OptionalExtension};

/// SQLite repository for the shelter records
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a new record and return its key
    ///
    /// # Errors
    /// * `DuplicateKey` - a record with the caller-chosen key exists; the
    ///   stored record is left untouched
    /// * `ReferenceViolation` - a referenced row is missing (enforcement on)
    /// * `ConstraintViolation` - any other schema constraint
    pub fn insert<R: Record>(conn: &Connection, draft: &R::Draft) -> Result<R::Key> {
        let kind = R::KIND;
        let values = R::draft_values(draft);
        let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
        let placeholders: Vec<String> = (1..=values.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            kind.table(),
            columns.join(", "),
            placeholders.join(", ")
        );

        let chosen_key = (!kind.key_is_assigned()).then(|| R::resolve_key(draft, 0).to_string());

        conn.execute(
            &sql,
            params_from_iter(values.iter().map(|(_, value)| to_sql_value(value))),
        )
        .map_err(|e| classify_write_error(kind, "insert", chosen_key.as_deref(), e))?;

        let key = R::resolve_key(draft, conn.last_insert_rowid());
        tracing::debug!(entity = kind.name(), key = %key, "record inserted");
        Ok(key)
    }

    /// All records of a type, in whatever order SQLite returns them
    pub fn get_all<R: Record>(conn: &Connection) -> Result<Vec<R>> {
        let kind = R::KIND;
        let sql = format!("SELECT {} FROM {}", kind.columns().join(", "), kind.table());

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let records = stmt
            .query_map([], |row| R::from_row(row))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        tracing::debug!(entity = kind.name(), row_count = records.len(), "records listed");
        Ok(records)
    }

    /// The record with `key`, or `None`
    pub fn get_by_key<R: Record>(conn: &Connection, key: &R::Key) -> Result<Option<R>> {
        let kind = R::KIND;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            kind.columns().join(", "),
            kind.table(),
            kind.key_field()
        );

        conn.query_row(&sql, [to_sql_value(&R::key_value(key))], |row| {
            R::from_row(row)
        })
        .optional()
        .map_err(from_rusqlite)
    }

    /// Overwrite the named fields of the record with `key`
    ///
    /// Returns the number of rows changed: 0 when the key does not exist,
    /// which is not an error.
    ///
    /// # Errors
    /// * `InvalidInput` - a field is not an editable column of the entity
    /// * `InvalidField` - a value does not fit the column's declared type
    pub fn update<R: Record>(
        conn: &Connection,
        key: &R::Key,
        changes: &[FieldChange],
    ) -> Result<usize> {
        let kind = R::KIND;
        for change in changes {
            check_change::<R>(change)?;
        }
        if changes.is_empty() {
            return Ok(0);
        }

        let assignments: Vec<String> = changes
            .iter()
            .enumerate()
            .map(|(i, change)| format!("{} = ?{}", change.field, i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            kind.table(),
            assignments.join(", "),
            kind.key_field(),
            changes.len() + 1
        );

        let params = changes
            .iter()
            .map(|change| to_sql_value(&change.value))
            .chain(std::iter::once(to_sql_value(&R::key_value(key))));

        let key_text = key.to_string();
        let affected = conn
            .execute(&sql, params_from_iter(params))
            .map_err(|e| classify_write_error(kind, "update", Some(&key_text), e))?;

        tracing::debug!(entity = kind.name(), key = %key, affected, "record updated");
        Ok(affected)
    }

    /// Remove the record with `key`; absent keys are a no-op
    ///
    /// # Errors
    /// * `ReferenceViolation` - the record is still referenced (enforcement on)
    pub fn delete<R: Record>(conn: &Connection, key: &R::Key) -> Result<usize> {
        let kind = R::KIND;
        let sql = format!("DELETE FROM {} WHERE {} = ?1", kind.table(), kind.key_field());

        let key_text = key.to_string();
        let affected = conn
            .execute(&sql, [to_sql_value(&R::key_value(key))])
            .map_err(|e| classify_write_error(kind, "delete", Some(&key_text), e))?;

        tracing::debug!(entity = kind.name(), key = %key, affected, "record deleted");
        Ok(affected)
    }

    /// Number of records of a type
    pub fn count<R: Record>(conn: &Connection) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::KIND.table());
        conn.query_row(&sql, [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

/// Reject unknown or mistyped columns before any SQL is built
fn check_change<R: Record>(change: &FieldChange) -> Result<()> {
    let kind = R::KIND;
    if !kind.editable_fields().contains(&change.field.as_str()) {
        return Err(ExError::from(PetAdoptError::UnknownField {
            entity: kind,
            field: change.field.clone(),
        })
        .with_op("update"));
    }

    let fits = matches!(
        (kind.field_type(&change.field), &change.value),
        (Some(FieldType::Text), FieldValue::Text(_))
            | (Some(FieldType::Integer), FieldValue::Integer(_))
            | (Some(FieldType::Decimal), FieldValue::Real(_) | FieldValue::Integer(_))
    );
    if !fits {
        return Err(ExError::from(PetAdoptError::InvalidField {
            entity: kind,
            field: change.field.clone(),
            reason: format!("value {:?} does not match the column type", change.value),
        })
        .with_op("update"));
    }

    Ok(())
}
