//! Question sets and model answer parsing.
//!
//! - [`question_set::QuestionSet`]: one to three questions shown in the panel
//! - [`parser::parse_answer`]: ordered heuristic chain over model output

pub mod parser;
pub mod question_set;
