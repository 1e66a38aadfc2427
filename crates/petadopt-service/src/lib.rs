//! Pet adoption service - CRUD orchestration over the record store
//!
//! Turns submitted forms into store operations, one statement per call, and
//! owns the lifecycle logging for every record operation.

pub mod commands;
pub mod service;

pub use service::CrudService;
