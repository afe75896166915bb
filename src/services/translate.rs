//! HTTP service for the translate workflow.
//!
//! One multipart POST per attempt; the response body is treated as an
//! opaque binary payload, never parsed as JSON.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData, RequestCredentials};

use crate::config::{API_BASE_URL, TRANSLATE_PATH};
use crate::services::download::{download_file_name, save_bytes};
use crate::types::{TranslateError, TranslateResult};

/// Error payload the service returns on failures.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Build the request URL for one translate attempt.
///
/// Same selection in, same URL out; every attempt is an independent,
/// equivalent request.
pub fn translate_url(src_lang: &str, tgt_lang: &str) -> String {
    format!(
        "{}{}?src_lang={}&tgt_lang={}",
        API_BASE_URL, TRANSLATE_PATH, src_lang, tgt_lang
    )
}

/// Loggable detail out of a failure response body.
fn server_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| body.trim().to_string())
}

/// Reject payloads that cannot be a translated file.
pub fn ensure_payload(bytes: Vec<u8>) -> TranslateResult<Vec<u8>> {
    if bytes.is_empty() {
        Err(TranslateError::InvalidResponse)
    } else {
        Ok(bytes)
    }
}

/// POST the file as multipart form data and return the translated bytes.
///
/// Credentials are included so the call honors cookies when the service
/// requires them. The multipart boundary is set by the browser.
pub async fn request_translation(
    file: &File,
    src_lang: &str,
    tgt_lang: &str,
) -> TranslateResult<Vec<u8>> {
    let form_data = FormData::new()
        .map_err(|e| TranslateError::Browser(format!("failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| TranslateError::Browser(format!("failed to append file: {:?}", e)))?;

    let url = translate_url(src_lang, tgt_lang);
    let request = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .body(form_data)
        .map_err(|e| TranslateError::Network(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| TranslateError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(TranslateError::Server(response.status(), server_detail(&body)));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| TranslateError::Network(format!("failed to read body: {}", e)))?;

    ensure_payload(bytes)
}

/// Run one full translate attempt: request, validate, save.
pub async fn run_translation(file: &File, src_lang: &str, tgt_lang: &str) -> TranslateResult<()> {
    let file_name = download_file_name(&file.name());
    log::info!(
        "📤 Translating {} ({} -> {})",
        file.name(),
        src_lang,
        tgt_lang
    );

    let bytes = request_translation(file, src_lang, tgt_lang).await?;
    save_bytes(&file_name, &bytes)?;

    log::info!("✅ Saved {} bytes as {}", bytes.len(), file_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_both_language_codes() {
        assert_eq!(
            translate_url("pt", "en"),
            "https://liaai.onrender.com/traduzir-arquivo/?src_lang=pt&tgt_lang=en"
        );
    }

    #[test]
    fn url_building_is_repeatable() {
        // Two runs with the same selection must target the same request.
        assert_eq!(translate_url("pt-pt", "ja"), translate_url("pt-pt", "ja"));
    }

    #[test]
    fn empty_payload_is_invalid() {
        assert_eq!(ensure_payload(Vec::new()), Err(TranslateError::InvalidResponse));
    }

    #[test]
    fn non_empty_payload_passes_through_unchanged() {
        let bytes = b"ol\xc3\xa1 mundo".to_vec();
        assert_eq!(ensure_payload(bytes.clone()), Ok(bytes));
    }

    #[test]
    fn detail_field_is_extracted_from_json_errors() {
        assert_eq!(
            server_detail(r#"{"detail":"src_lang desconhecido"}"#),
            "src_lang desconhecido"
        );
    }

    #[test]
    fn non_json_error_bodies_fall_back_to_raw_text() {
        assert_eq!(server_detail("  Bad Gateway\n"), "Bad Gateway");
        assert_eq!(server_detail(r#"{"detail":["not","a","string"]}"#), r#"{"detail":["not","a","string"]}"#);
    }
}
