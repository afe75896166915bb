//! Workflow services.
//!
//! This module provides the non-UI half of the translate workflow:
//!
//! # Services
//!
//! - [`translate`] - multipart upload to the translation service
//! - [`download`] - browser-side save of the translated payload

pub mod download;
pub mod translate;

pub use download::*;
pub use translate::*;
