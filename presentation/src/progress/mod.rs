//! Progress reporting while questions are generated

pub mod reporter;
