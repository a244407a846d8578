pub mod dispatch;
pub mod issue;
