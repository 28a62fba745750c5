pub mod entry;
pub mod error;
