//! Delete Confirm Dialog Component
//!
//! Shown while a delete is pending; nothing is sent until "Eliminar" is clicked.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{delete_prompt, Action, MovementsStateStoreFields};

#[component]
pub fn DeleteConfirmDialog() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.store.pending_delete().get().map(|movement| {
            let id = movement.id;
            view! {
                <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                    <div class="w-full max-w-md bg-white border border-gray-200 rounded-lg shadow-lg p-6 space-y-4" role="alertdialog">
                        <p class="text-sm text-gray-700">{delete_prompt(&movement)}</p>
                        <div class="flex gap-3">
                            <button
                                class="flex-1 bg-gray-100 hover:bg-gray-200 text-gray-700 py-2 px-4 rounded-lg font-medium transition-colors"
                                on:click=move |_| ctx.dispatch(Action::CancelDelete)
                            >
                                "Cancelar"
                            </button>
                            <button
                                class="flex-1 bg-red-600 hover:bg-red-700 text-white py-2 px-4 rounded-lg font-medium transition-colors"
                                on:click=move |_| ctx.delete(id)
                            >
                                "Eliminar"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
