//! Movement Table Component
//!
//! Filtered movement rows with edit/delete actions.

use leptos::prelude::*;

use crate::badge::badge_class;
use crate::context::use_app_context;
use crate::filter::{empty_message, filter_movements};
use crate::models::Movement;
use crate::store::{Action, MovementsStateStoreFields};

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[component]
fn MovementRow(movement: Movement) -> impl IntoView {
    let ctx = use_app_context();

    let badge = format!(
        "px-2 py-1 text-xs font-medium rounded-full {}",
        badge_class(movement.movement_type)
    );
    let type_label = movement.movement_type.map(|t| t.as_str()).unwrap_or("-");
    let for_edit = movement.clone();
    let for_delete = movement.clone();

    view! {
        <tr class="border-b border-gray-100 hover:bg-gray-50 transition-colors">
            <td class="py-3 px-4 text-gray-900 font-mono font-semibold">{or_dash(&movement.container_code)}</td>
            <td class="py-3 px-4">
                <span class=badge>{type_label}</span>
            </td>
            <td class="py-3 px-4 text-gray-600 text-xs">{or_dash(&movement.timestamp)}</td>
            <td class="py-3 px-4 text-gray-600 text-xs">{or_dash(&movement.notes)}</td>
            <td class="py-3 px-4">
                <div class="flex justify-center gap-2">
                    <button
                        class="p-2 hover:bg-blue-50 rounded-lg transition-colors"
                        title="Editar"
                        on:click=move |_| ctx.dispatch(Action::OpenEdit(for_edit.clone()))
                    >
                        "✎"
                    </button>
                    <button
                        class="p-2 hover:bg-red-50 rounded-lg transition-colors text-red-600"
                        title="Eliminar"
                        on:click=move |_| ctx.dispatch(Action::RequestDelete(for_delete.clone()))
                    >
                        "🗑"
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[component]
pub fn MovementTable() -> impl IntoView {
    let ctx = use_app_context();

    // Whole list re-renders on reload; rows are replaced, never patched
    let rows = move || {
        let filter = ctx.store.filter().get();
        let visible = filter_movements(&ctx.store.movements().read(), filter);
        if visible.is_empty() {
            view! {
                <tr>
                    <td colspan="5" class="py-8 text-center text-gray-500">{empty_message(filter)}</td>
                </tr>
            }
            .into_any()
        } else {
            visible
                .into_iter()
                .map(|movement| view! { <MovementRow movement=movement /> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="bg-white border border-gray-200 rounded-lg shadow-sm">
            <div class="p-6 border-b border-gray-200">
                <h3 class="text-lg font-semibold text-gray-900">"Registro de Movimientos"</h3>
            </div>
            <div class="p-6 overflow-x-auto">
                <table class="w-full text-sm">
                    <thead class="border-b border-gray-200">
                        <tr>
                            <th class="text-left py-3 px-4 font-semibold text-gray-900">"Contenedor"</th>
                            <th class="text-left py-3 px-4 font-semibold text-gray-900">"Tipo Movimiento"</th>
                            <th class="text-left py-3 px-4 font-semibold text-gray-900">"Fecha y Hora"</th>
                            <th class="text-left py-3 px-4 font-semibold text-gray-900">"Observaciones"</th>
                            <th class="text-center py-3 px-4 font-semibold text-gray-900">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("MSKU1"), "MSKU1");
    }
}
