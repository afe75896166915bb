//! Success/error banner derived from the workflow status.

use leptos::*;

use crate::types::WorkflowStatus;

/// Green banner on success, red banner on failure, nothing otherwise.
///
/// Purely reactive; the banner never mutates the status it renders.
#[component]
pub fn StatusBanner(status: ReadSignal<WorkflowStatus>) -> impl IntoView {
    view! {
        {move || {
            let (class, message) = match status.get() {
                WorkflowStatus::Succeeded(message) => ("status-banner success", message),
                WorkflowStatus::Failed(message) => ("status-banner error", message),
                _ => return None,
            };
            Some(view! {
                <div class=class>
                    <p>{message}</p>
                </div>
            })
        }}
    }
}
