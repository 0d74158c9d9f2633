//! kinetra-storage
//!
//! The document-store collaborator: typed JSON documents in S3. Records
//! are whole JSON objects under the key conventions from
//! `kinetra_core::doc_keys`; listing is prefix-based and any filtering or
//! ordering happens in the caller.

pub mod client;
pub mod documents;
pub mod error;
