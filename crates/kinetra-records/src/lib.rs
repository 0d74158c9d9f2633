//! kinetra-records
//!
//! Record building and the flows that persist records: patient
//! registration, appointment scheduling, and recovery evaluations. This
//! crate composes the pure core with the identity-provider and
//! document-store collaborators; it holds no state of its own and never
//! retries a collaborator call.

pub mod builder;
pub mod context;
pub mod error;
pub mod evaluations;
pub mod patients;
pub mod registration;
pub mod scheduling;
