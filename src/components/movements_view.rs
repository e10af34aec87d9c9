//! Movements View
//!
//! Loading screen, error banner, toolbar, table and the two dialogs.

use leptos::prelude::*;

use crate::components::{DeleteConfirmDialog, ErrorBanner, FilterBar, MovementFormModal, MovementTable};
use crate::context::use_app_context;
use crate::filter::filter_movements;
use crate::store::{Action, MovementsStateStoreFields};

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-64">
            <div class="text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto"></div>
                <p class="mt-4 text-gray-600">"Cargando movimientos..."</p>
            </div>
        </div>
    }
}

#[component]
pub fn MovementsView() -> impl IntoView {
    let ctx = use_app_context();

    let visible_count = move || {
        filter_movements(&ctx.store.movements().read(), ctx.store.filter().get()).len()
    };

    view! {
        <Show when=move || !ctx.store.loading().get() fallback=|| view! { <LoadingScreen /> }>
            <div class="space-y-6">
                <ErrorBanner />

                <div class="flex justify-between items-center flex-wrap gap-4">
                    <p class="text-sm text-gray-600">
                        "Total de movimientos: " {visible_count}
                    </p>
                    <div class="flex gap-2 flex-wrap">
                        <FilterBar />
                        <button
                            class="bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 text-white px-4 py-2 rounded-lg font-medium transition-colors"
                            disabled=move || ctx.store.submitting().get()
                            on:click=move |_| ctx.dispatch(Action::OpenCreate)
                        >
                            "+ Registrar movimiento"
                        </button>
                    </div>
                </div>

                <MovementTable />
                <MovementFormModal />
                <DeleteConfirmDialog />
            </div>
        </Show>
    }
}
