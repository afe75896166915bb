//! Lia.AI - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for translating plain-text files through the
//! Lia.AI translation service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title)                                           │
//! │  ├── LanguagePicker x2 (Origem / Destino)                   │
//! │  ├── Dropzone (.txt intake)                                 │
//! │  ├── TranslateButton (workflow trigger)                     │
//! │  └── StatusBanner (success / error)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LoadingOverlay + Starfield (render-only, driven by state)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Selection, WorkflowStatus, catalog)
//! - [`components`] - UI components (Dropzone, pickers, banners)
//! - [`services`] - Translation request + download side effect

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Catalog
    Language, LanguageSlot, language_name, LANGUAGES,
    // Selection
    Selection,
    // Workflow
    WorkflowStatus,
    // Errors
    TranslateError, TranslateResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Lia.AI - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state: the user's selection plus the lifecycle of one attempt.
    // Only the translate workflow writes the status.
    let (selection, set_selection) = create_signal(Selection::default());
    let (status, set_status) = create_signal(WorkflowStatus::Idle);

    view! {
        <Starfield/>

        <div class="panel">
            <Hero/>

            <div class="pickers">
                <LanguagePicker
                    label="Origem"
                    side=LanguageSlot::Source
                    selection=selection
                    set_selection=set_selection
                />
                <LanguagePicker
                    label="Destino"
                    side=LanguageSlot::Target
                    selection=selection
                    set_selection=set_selection
                />
            </div>

            <Dropzone selection=selection set_selection=set_selection/>

            <TranslateButton selection=selection status=status set_status=set_status/>

            <StatusBanner status=status/>
        </div>

        <LoadingOverlay status=status/>
    }
}
