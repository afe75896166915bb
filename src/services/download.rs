//! Browser-side save of the translated payload.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::config::DOWNLOAD_PREFIX;
use crate::types::{TranslateError, TranslateResult};

/// Name of the saved artifact for `original`.
pub fn download_file_name(original: &str) -> String {
    format!("{}{}", DOWNLOAD_PREFIX, original)
}

/// Materialize `bytes` as a Blob and trigger a one-shot save-as download.
///
/// The object URL is revoked right after the click; the artifact only
/// exists to drive the download.
pub fn save_bytes(file_name: &str, bytes: &[u8]) -> TranslateResult<()> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| TranslateError::Browser(format!("failed to create Blob: {:?}", e)))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| TranslateError::Browser(format!("failed to create object URL: {:?}", e)))?;

    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| TranslateError::Browser(format!("failed to create anchor: {:?}", e)))?
        .dyn_into()
        .map_err(|_| TranslateError::Browser("anchor element has unexpected type".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    // O clique só dispara com o elemento no DOM.
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_name_prefixes_the_original() {
        assert_eq!(download_file_name("report.txt"), "translated_report.txt");
    }

    #[test]
    fn download_name_keeps_the_original_byte_for_byte() {
        assert_eq!(
            download_file_name("relatório final.TXT"),
            "translated_relatório final.TXT"
        );
        assert_eq!(download_file_name(""), "translated_");
    }
}
