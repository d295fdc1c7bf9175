//! Turns an extracted export tree into the in-memory [`crate::models::ExportModel`].

pub mod builder;

pub use builder::load_export;
