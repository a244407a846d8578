//! Issue status tags and the lifecycle transition table.
//!
//! Status values arrive as free-form strings. The four known tags are matched
//! case-insensitively and normalized to their canonical spelling; anything else
//! is kept verbatim in [`IssueStatus::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// IssueStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an issue.
///
/// ```text
/// New → InProgress → Resolved
///                  → Closed
/// *   → Closed
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueStatus {
    New,
    InProgress,
    Resolved,
    Closed,
    /// A status outside the known set, stored as given.
    Other(String),
}

impl IssueStatus {
    /// Parse a status tag. Known tags match case-insensitively; surrounding
    /// whitespace is significant.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("New") {
            Self::New
        } else if value.eq_ignore_ascii_case("InProgress") {
            Self::InProgress
        } else if value.eq_ignore_ascii_case("Resolved") {
            Self::Resolved
        } else if value.eq_ignore_ascii_case("Closed") {
            Self::Closed
        } else {
            Self::Other(value.to_string())
        }
    }

    /// Canonical string used in storage and on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "New",
            Self::InProgress => "InProgress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Other(raw) => raw,
        }
    }

    /// Whether entering this status marks the issue as resolved.
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// Check whether moving from `self` to `next` is on the transition table.
    ///
    /// Self-transitions are always allowed; `Closed` is reachable from anywhere.
    #[must_use]
    pub fn can_transition_to(&self, next: &Self) -> bool {
        if self == next || *next == Self::Closed {
            return true;
        }
        matches!(
            (self, next),
            (Self::New, Self::InProgress) | (Self::InProgress, Self::Resolved)
        )
    }
}

impl From<String> for IssueStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<IssueStatus> for String {
    fn from(value: IssueStatus) -> Self {
        match value {
            IssueStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
