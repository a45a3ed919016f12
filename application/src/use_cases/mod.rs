//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_connection;
pub mod fetch_questions;
pub mod key_store;
pub mod question_panel;
#[cfg(test)]
pub(crate) mod test_support;
