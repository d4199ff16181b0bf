//! Index document model for protodex
//!
//! Typed shapes for the JSON documents the indexing pipeline emits, plus
//! loading helpers with a path-carrying error taxonomy.

pub mod document;
pub mod error;
pub mod load;

pub use document::{
    DefinesIndex, IndexDocument, ObjectsIndex, ProtoEntry, ProtoIndex, References, Section,
    TilesIndex, define_pid, flag_attr, str_attr,
};
pub use error::{Error, Result};
pub use load::{load_json, load_optional};
