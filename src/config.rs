//! Application configuration.
//!
//! Centralized configuration for the Lia.AI frontend. The translation
//! backend is a hosted service, so these are hardcoded; there is no
//! environment or config-file layer in a purely client-side build.

/// Translation service base URL.
pub const API_BASE_URL: &str = "https://liaai.onrender.com";

/// Path of the file-translate operation on the service.
pub const TRANSLATE_PATH: &str = "/traduzir-arquivo/";

/// Application name, shown as the page title and in the hero.
pub const APP_NAME: &str = "Lia.AI";

/// Default source language code.
pub const DEFAULT_SRC_LANG: &str = "pt";

/// Default target language code.
pub const DEFAULT_TGT_LANG: &str = "en";

/// MIME type accepted by the dropzone.
pub const ACCEPTED_MIME: &str = "text/plain";

/// File extension accepted by the dropzone (matched case-insensitively).
pub const ACCEPTED_EXTENSION: &str = ".txt";

/// Prefix prepended to the original file name for the downloaded result.
pub const DOWNLOAD_PREFIX: &str = "translated_";

/// Number of decorative stars rendered behind the form.
pub const STAR_COUNT: usize = 100;

// =============================================================================
// Fixed user-facing messages (PT-BR)
// =============================================================================

/// Shown when translate is triggered with no file selected.
pub const MSG_NO_FILE: &str = "Selecione um arquivo!";

/// Shown when the translated file was downloaded.
pub const MSG_SUCCESS: &str = "Tradução concluída com sucesso!";

/// Generic failure message; internal causes stay in the console log.
pub const MSG_TRANSLATE_FAILED: &str = "Erro ao traduzir arquivo.";
