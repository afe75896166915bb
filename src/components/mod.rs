//! UI Components for the Lia.AI application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title
//! - [`Starfield`] - Decorative background stars
//!
//! # Feature Components
//! - [`LanguagePicker`] - Source/target language selection
//! - [`Dropzone`] - Plain-text file intake with drag & drop
//! - [`TranslateButton`] - Workflow trigger
//! - [`StatusBanner`] - Success/error feedback
//! - [`LoadingOverlay`] - Spinner while a request is in flight

mod dropzone;
mod hero;
mod language;
mod overlay;
mod starfield;
mod status;
mod translate;

pub use dropzone::*;
pub use hero::*;
pub use language::*;
pub use overlay::*;
pub use starfield::*;
pub use status::*;
pub use translate::*;
