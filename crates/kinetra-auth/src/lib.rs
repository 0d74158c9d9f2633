//! kinetra-auth
//!
//! The identity-provider collaborator: Cognito account provisioning and
//! sign-in flows. Patient accounts are created with a temporary credential
//! derived from the RUT; Cognito forces a password change on first sign-in.

pub mod client;
pub mod error;
pub mod flows;
pub mod jwt;
pub mod provision;
