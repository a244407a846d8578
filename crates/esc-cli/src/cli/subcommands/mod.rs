mod issue;

pub use issue::IssueCommands;
