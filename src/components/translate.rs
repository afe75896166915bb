//! Translate trigger and workflow orchestration.

use leptos::*;

use crate::services::run_translation;
use crate::types::{Selection, TranslateError, WorkflowStatus};

/// The "Traduzir Arquivo" button.
///
/// Owns the workflow: precondition check, `Running` transition, one async
/// request, terminal settle. Disabling the button while a request is in
/// flight is the only re-entrancy guard.
#[component]
pub fn TranslateButton(
    selection: ReadSignal<Selection>,
    status: ReadSignal<WorkflowStatus>,
    set_status: WriteSignal<WorkflowStatus>,
) -> impl IntoView {
    let on_click = move |_| {
        let current = selection.get();
        let Some(file) = current.file else {
            // Sem arquivo não há chamada de rede.
            set_status.set(WorkflowStatus::from_outcome(Err(TranslateError::NoFileSelected)));
            return;
        };

        set_status.set(WorkflowStatus::Running);
        spawn_local(async move {
            let outcome = run_translation(&file, &current.src_lang, &current.tgt_lang).await;
            if let Err(error) = &outcome {
                log::error!("❌ Translate failed: {}", error);
            }
            set_status.set(WorkflowStatus::from_outcome(outcome));
        });
    };

    view! {
        <button
            class="translate-button"
            on:click=on_click
            disabled=move || status.get().is_running()
        >
            {move || if status.get().is_running() {
                "Traduzindo..."
            } else {
                "Traduzir Arquivo"
            }}
        </button>
    }
}
