//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`GenerationConfig`]: model, sampling and budget parameters
//! - [`BundledCredential`]: credential shipped with the build

pub mod bundled_credential;
pub mod generation;

pub use bundled_credential::BundledCredential;
pub use generation::GenerationConfig;
