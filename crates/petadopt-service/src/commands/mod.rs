pub mod form_log;
pub mod records;
