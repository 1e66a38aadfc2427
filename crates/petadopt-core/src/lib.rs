//! Pet adoption core - domain kernel shared by store, service and web
//!
//! This crate provides:
//! - Entity models (Pet, Adopter, Adoption, Payment) and the `Entity` trait
//!   that describes their keys, drafts and editable fields
//! - Form validation turning submitted field-value pairs into typed drafts
//! - The canonical error facility (`ExError`, `ExErrorKind`, `PetAdoptError`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Used by the exported logging macros
pub use petadopt_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PetAdoptError, Result};
pub use model::{
    Adopter, Adoption, Entity, EntityKind, FieldChange, FieldValue, NewAdoption, NewPayment,
    Payment, Pet,
};
pub use rules::validation::FormFields;
