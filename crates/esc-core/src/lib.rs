//! # esc-core
//!
//! Core types and the issue lifecycle for Escalate.
//!
//! This crate provides:
//! - The `Issue` entity and its creation draft
//! - Status tags with a transition table and set-once timestamp rules
//! - Update and filter types
//! - The `IssueStore` and `IssueNotifier` seams
//! - `IssueManager`, which persists issues and notifies on create
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lifecycle;
pub mod manager;
pub mod notify;
pub mod store;
pub mod updates;
