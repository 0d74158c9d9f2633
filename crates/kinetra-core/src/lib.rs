//! kinetra-core
//!
//! Pure domain types, RUT checksum logic, recovery scoring, and S3 key
//! conventions. No AWS SDK dependency — this is the shared vocabulary of
//! the Kinetra system.

pub mod doc_keys;
pub mod error;
pub mod models;
pub mod recovery;
pub mod rut;
