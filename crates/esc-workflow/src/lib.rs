//! # esc-workflow
//!
//! Starts a workflow instance on the external workflow engine for every newly
//! reported issue.
//!
//! [`WorkflowClient`] makes the HTTP calls (API key or OAuth client
//! credentials). [`WorkflowDispatcher`] runs them in the background and
//! implements [`esc_core::notify::IssueNotifier`], so it plugs straight into
//! the issue manager.

pub mod auth;
pub mod client;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod payload;

pub use auth::{ClientCredentials, WorkflowAuth};
pub use client::WorkflowClient;
pub use dispatcher::WorkflowDispatcher;
pub use error::WorkflowError;
pub use payload::{StartEvent, WorkflowContext, WorkflowInstanceRequest};
