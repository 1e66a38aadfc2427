//! Record command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for record operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store uses only `tracing::debug!()` for statement details.

use petadopt_core::{log_op_end, log_op_error, log_op_start};
use petadopt_core::{Entity, ExError, FormFields, PetAdoptError};
use petadopt_store::errors::Result;
use petadopt_store::{Record, SqliteRepo};
use rusqlite::Connection;

use crate::commands::form_log::LoggedForm;

/// Run `body` between start/end log events for `op`
fn logged<T>(
    op: &'static str,
    entity: &'static str,
    body: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let start = std::time::Instant::now();
    let result = body().map_err(|e| {
        let e = if e.op().is_none() { e.with_op(op) } else { e };
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            entity = entity
        );
        e
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        entity = entity
    );
    Ok(result)
}

fn domain(err: PetAdoptError) -> ExError {
    ExError::from(err)
}

/// List every record of a type
pub fn record_list<R: Record>(conn: &Connection) -> Result<Vec<R>> {
    let entity = R::KIND.name();
    log_op_start!("record_list", entity = entity);
    logged("record_list", entity, || SqliteRepo::get_all::<R>(conn))
}

/// Validate an add form and insert the record
///
/// ## Returns
///
/// The record's key: the submitted one, or the id the store assigned
///
/// ## Errors
///
/// - `MissingField`: a create field was not submitted
/// - `InvalidField`: an integer or decimal field did not parse
/// - `DuplicateKey`: the submitted key is taken
/// - `ReferenceViolation`: a referenced record is missing (enforcement on)
pub fn record_create<R: Record>(conn: &Connection, form: &FormFields) -> Result<R::Key> {
    let entity = R::KIND.name();
    log_op_start!(
        "record_create",
        entity = entity,
        form = ?LoggedForm::new(R::KIND, form)
    );
    logged("record_create", entity, || {
        let draft = R::draft_from_form(form).map_err(domain)?;
        let key = SqliteRepo::insert::<R>(conn, &draft)?;
        tracing::debug!(entity, key = %key, "record created");
        Ok(key)
    })
}

/// Fetch one record by a key taken from a request path
///
/// ## Errors
///
/// - `InvalidField`: the key does not parse for this entity
/// - `NotFound`: no record has this key
pub fn record_get<R: Record>(conn: &Connection, raw_key: &str) -> Result<R> {
    let entity = R::KIND.name();
    log_op_start!("record_get", entity = entity, key = raw_key);
    logged("record_get", entity, || {
        let key = R::parse_key(raw_key).map_err(domain)?;
        SqliteRepo::get_by_key::<R>(conn, &key)?.ok_or_else(|| {
            domain(PetAdoptError::NotFound {
                entity: R::KIND,
                key: raw_key.to_string(),
            })
        })
    })
}

/// Validate an edit form and overwrite every editable field
///
/// An absent key changes nothing and is not an error.
///
/// ## Errors
///
/// - `InvalidField`: the key or a typed field does not parse
/// - `MissingField`: an editable field was not submitted
pub fn record_edit<R: Record>(conn: &Connection, raw_key: &str, form: &FormFields) -> Result<usize> {
    let entity = R::KIND.name();
    log_op_start!(
        "record_edit",
        entity = entity,
        key = raw_key,
        form = ?LoggedForm::new(R::KIND, form)
    );
    logged("record_edit", entity, || {
        let key = R::parse_key(raw_key).map_err(domain)?;
        let changes = R::changes_from_form(form).map_err(domain)?;
        let affected = SqliteRepo::update::<R>(conn, &key, &changes)?;
        if affected == 0 {
            tracing::debug!(entity, key = raw_key, "edit matched no record");
        }
        Ok(affected)
    })
}

/// Delete a record; an absent key is a no-op
///
/// ## Errors
///
/// - `InvalidField`: the key does not parse for this entity
/// - `ReferenceViolation`: the record is still referenced (enforcement on)
pub fn record_remove<R: Record>(conn: &Connection, raw_key: &str) -> Result<usize> {
    let entity = R::KIND.name();
    log_op_start!("record_remove", entity = entity, key = raw_key);
    logged("record_remove", entity, || {
        let key = R::parse_key(raw_key).map_err(domain)?;
        SqliteRepo::delete::<R>(conn, &key)
    })
}
