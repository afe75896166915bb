//! Full-screen loading overlay.

use leptos::*;

use crate::types::WorkflowStatus;

/// Spinner overlay shown while a translate request is in flight.
#[component]
pub fn LoadingOverlay(status: ReadSignal<WorkflowStatus>) -> impl IntoView {
    view! {
        <Show
            when=move || status.get().is_running()
            fallback=|| view! { }
        >
            <div class="loading-overlay">
                <div class="spinner"></div>
                <p>"Carregando..."</p>
            </div>
        </Show>
    }
}
