//! Entity structs for the Escalate domain.
//!
//! Entities serialize in camelCase so the JSON shape matches what operators
//! and the workflow engine see.

mod issue;

pub use issue::{Issue, IssueDraft};
