//! Issue update builder.
//!
//! Only `Some` fields are applied. `status` goes through the lifecycle rules in
//! [`crate::lifecycle`]; `resolution_comment` is overwritten unconditionally.

use serde::{Deserialize, Serialize};

use crate::enums::IssueStatus;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_comment: Option<String>,
}

impl IssueUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.resolution_comment.is_none()
    }
}

pub struct IssueUpdateBuilder(IssueUpdate);

impl Default for IssueUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IssueUpdate::default())
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.0.status = Some(IssueStatus::from(status.into()));
        self
    }

    #[must_use]
    pub fn resolution_comment(mut self, comment: impl Into<String>) -> Self {
        self.0.resolution_comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn build(self) -> IssueUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_parses_status() {
        let update = IssueUpdateBuilder::new()
            .status("resolved")
            .resolution_comment("fixed")
            .build();
        assert_eq!(update.status, Some(IssueStatus::Resolved));
        assert_eq!(update.resolution_comment.as_deref(), Some("fixed"));
    }

    #[test]
    fn empty_update() {
        assert!(IssueUpdateBuilder::new().build().is_empty());
        assert!(!IssueUpdateBuilder::new().status("Closed").build().is_empty());
    }

    #[test]
    fn deserializes_request_shape() {
        let update: IssueUpdate =
            serde_json::from_str(r#"{"status":"InProgress","resolutionComment":"on it"}"#).unwrap();
        assert_eq!(update.status, Some(IssueStatus::InProgress));
        assert_eq!(update.resolution_comment.as_deref(), Some("on it"));
    }
}
