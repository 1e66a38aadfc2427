//! Domain models
//!
//! One struct per table plus the `Entity` trait tying each to its key type,
//! insert draft, and editable field set.

pub mod adopter;
pub mod adoption;
pub mod entity;
pub mod field;
pub mod payment;
pub mod pet;

pub use adopter::Adopter;
pub use adoption::{Adoption, NewAdoption};
pub use entity::{Entity, EntityKind};
pub use field::{FieldChange, FieldType, FieldValue};
pub use payment::{NewPayment, Payment};
pub use pet::Pet;
