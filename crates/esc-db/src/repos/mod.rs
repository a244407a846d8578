//! Store implementations on [`crate::EscDb`].

pub mod issue;
