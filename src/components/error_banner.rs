//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::MovementsStateStoreFields;

/// Last error message with a retry button that re-runs the loader
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.store.error().get().map(|message| view! {
            <div class="bg-red-50 border border-red-200 rounded-lg p-4" role="alert">
                <p class="text-sm text-red-700">{message}</p>
                <button
                    class="mt-2 text-sm text-red-600 hover:text-red-500 underline"
                    on:click=move |_| ctx.reload()
                >
                    "Reintentar"
                </button>
            </div>
        })}
    }
}
