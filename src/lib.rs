//! ScanRow - typed, zero-copy access to fixed-layout binary scan rows
//!
//! Given the raw bytes of a scan batch (a direct buffer of fixed-width rows plus an
//! indirect buffer holding variable-length payloads) and the projection schema,
//! this crate exposes schema-validated field access, null semantics and
//! debug/CSV rendering of each row.

pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::codec::{CodecError, CodecResult, Redaction, RowView, ScanBatch};
pub use crate::core::schema::{ColumnSchema, ColumnTypeAttributes, Schema};
pub use crate::core::types::{DataType, Datum};
