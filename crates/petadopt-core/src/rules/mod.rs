//! Input rules applied before anything reaches the store

pub mod validation;
