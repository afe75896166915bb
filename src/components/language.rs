//! Language pair pickers.

use leptos::*;

use crate::types::{LanguageSlot, Selection, LANGUAGES};

/// One `<select>` over the full language catalog.
///
/// Instantiated twice, for source and target. Changing it only updates the
/// selection; picking the same code on both sides is allowed.
#[component]
pub fn LanguagePicker(
    /// Field label ("Origem"/"Destino").
    label: &'static str,
    /// Which side of the pair this picker controls.
    side: LanguageSlot,
    selection: ReadSignal<Selection>,
    set_selection: WriteSignal<Selection>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let code = event_target_value(&ev);
        set_selection.update(|s| s.set_language(side, code));
    };

    view! {
        <div class="picker">
            <label>{label}</label>
            <select
                on:change=on_change
                prop:value=move || selection.with(|s| s.language(side).to_string())
            >
                {LANGUAGES
                    .iter()
                    .map(|lang| view! {
                        <option value=lang.code>{lang.name}</option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
