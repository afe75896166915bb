//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Language Types** - the fixed catalog of supported languages
//! - **Selection Types** - the user's current file + language pair
//! - **Workflow Types** - lifecycle of one translate attempt
//! - **Error Types** - frontend error handling

use std::fmt;

use crate::config::{
    DEFAULT_SRC_LANG, DEFAULT_TGT_LANG, MSG_NO_FILE, MSG_SUCCESS, MSG_TRANSLATE_FAILED,
};

// =============================================================================
// Language Types
// =============================================================================

/// A supported translation language.
///
/// `code` is what the service understands; `name` is display-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    /// Language code sent as a query parameter.
    pub code: &'static str,
    /// Display name (PT-BR).
    pub name: &'static str,
}

/// Fixed catalog of supported languages, loaded once and never mutated.
pub const LANGUAGES: &[Language] = &[
    Language { code: "pt", name: "Português (Brasil)" },
    Language { code: "pt-pt", name: "Português (Portugal)" },
    Language { code: "en", name: "Inglês" },
    Language { code: "es", name: "Espanhol" },
    Language { code: "fr", name: "Francês" },
    Language { code: "it", name: "Italiano" },
    Language { code: "de", name: "Alemão" },
    Language { code: "hu", name: "Húngaro" },
    Language { code: "ja", name: "Japonês" },
    Language { code: "zh", name: "Chinês" },
];

/// Look up the display name for a language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|l| l.code == code).map(|l| l.name)
}

/// Which side of the language pair a picker controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageSlot {
    Source,
    Target,
}

// =============================================================================
// Selection Types
// =============================================================================

/// The user's current choices: one optional file plus a language pair.
///
/// Held in a single signal. The file is only ever read, never mutated;
/// selecting a new file replaces it. Source and target are independently
/// mutable and may hold the same code.
#[derive(Clone, Debug)]
pub struct Selection {
    /// File chosen via the dropzone, if any.
    pub file: Option<web_sys::File>,
    /// Source language code.
    pub src_lang: String,
    /// Target language code.
    pub tgt_lang: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            file: None,
            src_lang: DEFAULT_SRC_LANG.to_string(),
            tgt_lang: DEFAULT_TGT_LANG.to_string(),
        }
    }
}

impl Selection {
    /// Language code currently held in `slot`.
    pub fn language(&self, slot: LanguageSlot) -> &str {
        match slot {
            LanguageSlot::Source => &self.src_lang,
            LanguageSlot::Target => &self.tgt_lang,
        }
    }

    /// Replace the language code held in `slot`.
    pub fn set_language(&mut self, slot: LanguageSlot, code: String) {
        match slot {
            LanguageSlot::Source => self.src_lang = code,
            LanguageSlot::Target => self.tgt_lang = code,
        }
    }
}

// =============================================================================
// Workflow Types
// =============================================================================

/// Lifecycle state of one translate attempt.
///
/// Terminal messages live inside the variant, so a running workflow cannot
/// carry a stale success or error message. Only the translate workflow
/// mutates this; presentation just reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkflowStatus {
    /// No attempt made yet (or state at mount).
    Idle,
    /// A request is in flight; the trigger control should be disabled.
    Running,
    /// The translated file was downloaded.
    Succeeded(String),
    /// The attempt failed; the message is the fixed user-facing text.
    Failed(String),
}

impl WorkflowStatus {
    /// Whether a request is currently in flight.
    pub fn is_running(&self) -> bool {
        matches!(self, WorkflowStatus::Running)
    }

    /// Settle a finished attempt into its terminal state.
    ///
    /// The single authority for terminal states: success always carries the
    /// fixed success message, failures always carry the error's user-facing
    /// message. Internal detail stays with the caller for logging.
    pub fn from_outcome(outcome: Result<(), TranslateError>) -> Self {
        match outcome {
            Ok(()) => WorkflowStatus::Succeeded(MSG_SUCCESS.to_string()),
            Err(e) => WorkflowStatus::Failed(e.user_message().to_string()),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors from the translate workflow.
///
/// `Display` carries the internal diagnostic; [`TranslateError::user_message`]
/// maps every variant to one of the fixed PT-BR status messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslateError {
    /// Translate was triggered with no file in the selection.
    NoFileSelected,
    /// The service answered with a non-success HTTP status.
    Server(u16, String),
    /// The response body was empty or not usable as a file.
    InvalidResponse,
    /// Transport-level failure (connection, CORS, DNS).
    Network(String),
    /// A browser API failed (FormData, Blob, anchor).
    Browser(String),
}

impl TranslateError {
    /// The fixed message surfaced through the status banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            TranslateError::NoFileSelected => MSG_NO_FILE,
            _ => MSG_TRANSLATE_FAILED,
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::NoFileSelected => write!(f, "no file selected"),
            TranslateError::Server(status, detail) => {
                write!(f, "server responded {}: {}", status, detail)
            }
            TranslateError::InvalidResponse => write!(f, "Formato de resposta inválido."),
            TranslateError::Network(detail) => write!(f, "network failure: {}", detail),
            TranslateError::Browser(detail) => write!(f, "browser API failure: {}", detail),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Result type alias for workflow operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_ten_unique_codes() {
        assert_eq!(LANGUAGES.len(), 10);
        let codes: HashSet<&str> = LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
    }

    #[test]
    fn catalog_covers_defaults() {
        assert_eq!(language_name(DEFAULT_SRC_LANG), Some("Português (Brasil)"));
        assert_eq!(language_name(DEFAULT_TGT_LANG), Some("Inglês"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn selection_defaults_to_pt_en_and_no_file() {
        let selection = Selection::default();
        assert!(selection.file.is_none());
        assert_eq!(selection.language(LanguageSlot::Source), "pt");
        assert_eq!(selection.language(LanguageSlot::Target), "en");
    }

    #[test]
    fn slots_are_independent_and_allow_equal_codes() {
        let mut selection = Selection::default();
        selection.set_language(LanguageSlot::Target, "pt".to_string());
        assert_eq!(selection.src_lang, "pt");
        assert_eq!(selection.tgt_lang, "pt");

        selection.set_language(LanguageSlot::Source, "ja".to_string());
        assert_eq!(selection.src_lang, "ja");
        assert_eq!(selection.tgt_lang, "pt");
    }

    #[test]
    fn only_running_reports_running() {
        assert!(WorkflowStatus::Running.is_running());
        assert!(!WorkflowStatus::Idle.is_running());
        assert!(!WorkflowStatus::Succeeded("ok".into()).is_running());
        assert!(!WorkflowStatus::Failed("no".into()).is_running());
    }

    #[test]
    fn success_settles_with_fixed_message() {
        assert_eq!(
            WorkflowStatus::from_outcome(Ok(())),
            WorkflowStatus::Succeeded("Tradução concluída com sucesso!".to_string())
        );
    }

    #[test]
    fn missing_file_settles_with_no_file_message() {
        assert_eq!(
            WorkflowStatus::from_outcome(Err(TranslateError::NoFileSelected)),
            WorkflowStatus::Failed("Selecione um arquivo!".to_string())
        );
    }

    #[test]
    fn remote_failures_all_settle_with_generic_message() {
        let failures = [
            TranslateError::Server(500, "boom".into()),
            TranslateError::InvalidResponse,
            TranslateError::Network("timeout".into()),
            TranslateError::Browser("blob".into()),
        ];
        for error in failures {
            assert_eq!(
                WorkflowStatus::from_outcome(Err(error)),
                WorkflowStatus::Failed("Erro ao traduzir arquivo.".to_string())
            );
        }
    }

    #[test]
    fn invalid_response_detail_stays_internal() {
        let error = TranslateError::InvalidResponse;
        assert_eq!(error.to_string(), "Formato de resposta inválido.");
        assert_eq!(error.user_message(), "Erro ao traduzir arquivo.");
    }
}
