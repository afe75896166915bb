//! Plain-text file intake with drag & drop support.
//!
//! Accepts at most one file per interaction, via drop or click-to-browse.
//! Intake only replaces the selected file; it never touches the workflow
//! status.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::config::{ACCEPTED_EXTENSION, ACCEPTED_MIME};
use crate::types::Selection;

/// Whether a candidate passes the plain-text filter.
///
/// Anything else never enters the candidate list; rejected files are
/// silently ignored, not reported.
fn is_plain_text(name: &str, mime: &str) -> bool {
    mime == ACCEPTED_MIME || name.to_lowercase().ends_with(ACCEPTED_EXTENSION)
}

/// First accepted candidate out of a drop/selection event, if any.
fn first_accepted(files: Option<FileList>) -> Option<File> {
    let files = files?;
    (0..files.length())
        .filter_map(|i| files.get(i))
        .find(|f| is_plain_text(&f.name(), &f.type_()))
}

#[component]
pub fn Dropzone(
    selection: ReadSignal<Selection>,
    set_selection: WriteSignal<Selection>,
) -> impl IntoView {
    // Lista vazia de candidatos é um no-op; o arquivo anterior permanece.
    let intake = move |file: Option<File>| {
        if let Some(file) = file {
            set_selection.update(|s| s.file = Some(file));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        intake(first_accepted(input.files()));
    };

    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        intake(first_accepted(ev.data_transfer().and_then(|dt| dt.files())));
    };

    // Abre o seletor de arquivos ao clicar na zona inteira.
    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("fileInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div
            class="dropzone"
            id="dropZone"
            on:click=trigger_file_input
            on:dragover=on_drag_over
            on:drop=on_drop
        >
            <Show
                when=move || selection.with(|s| s.file.is_some())
                fallback=|| view! {
                    <div class="dropzone-idle">
                        <div class="dropzone-icon">"☁"</div>
                        <p>"Arraste seu arquivo .txt aqui ou clique para selecionar"</p>
                    </div>
                }
            >
                <p class="dropzone-file">
                    {move || selection.with(|s| {
                        s.file.as_ref().map(|f| f.name()).unwrap_or_default()
                    })}
                </p>
            </Show>

            <input
                type="file"
                id="fileInput"
                accept=".txt,text/plain"
                style="display:none"
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                on:change=on_file_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_files_are_accepted_by_mime_or_extension() {
        assert!(is_plain_text("notas.txt", "text/plain"));
        assert!(is_plain_text("NOTAS.TXT", ""));
        assert!(is_plain_text("sem-extensao", "text/plain"));
    }

    #[test]
    fn other_types_never_become_candidates() {
        assert!(!is_plain_text("dados.csv", "text/csv"));
        assert!(!is_plain_text("foto.png", "image/png"));
        assert!(!is_plain_text("arquivo.txt.pdf", "application/pdf"));
    }
}
