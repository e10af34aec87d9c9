//! Movement Form Modal Component
//!
//! Create/edit form. All inputs write through `Action::EditForm`; the
//! whole modal is disabled while a save is in flight.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::MovementType;
use crate::store::{Action, FormField, MovementsStateStoreFields};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent text-gray-700 disabled:bg-gray-100";

#[component]
pub fn MovementFormModal() -> impl IntoView {
    let ctx = use_app_context();

    let submitting = move || ctx.store.submitting().get();
    let is_editing = move || ctx.store.modal().get().editing_id().is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let container_value = move || {
        ctx.store
            .form()
            .read()
            .container_id
            .map(|id| id.to_string())
            .unwrap_or_default()
    };

    view! {
        <Show when=move || ctx.store.modal().get().is_open()>
            <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-white border border-gray-200 rounded-lg shadow-lg">
                    <div class="flex justify-between items-center p-6 border-b border-gray-200">
                        <h3 class="text-lg font-semibold text-gray-900">
                            {move || if is_editing() { "Editar Movimiento" } else { "Registrar Movimiento" }}
                        </h3>
                        <button
                            class="p-1 hover:bg-gray-100 rounded transition-colors"
                            disabled=submitting
                            on:click=move |_| ctx.dispatch(Action::CloseModal)
                        >
                            "✕"
                        </button>
                    </div>
                    <form class="p-6 space-y-4" on:submit=on_submit>
                        <div class="space-y-2">
                            <label class="text-sm font-medium text-gray-700">"Contenedor *"</label>
                            <select
                                required
                                class=INPUT_CLASS
                                disabled=submitting
                                prop:value=container_value
                                on:change=move |ev| {
                                    let id = event_target_value(&ev).parse::<u32>().ok();
                                    ctx.dispatch(Action::EditForm(FormField::Container(id)));
                                }
                            >
                                <option value="">"Seleccionar contenedor..."</option>
                                {move || ctx.store.containers().get().into_iter().map(|container| {
                                    let selected = container_value() == container.id.to_string();
                                    view! {
                                        <option value=container.id.to_string() selected=selected>
                                            {container.label()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="space-y-2">
                            <label class="text-sm font-medium text-gray-700">"Tipo Movimiento *"</label>
                            <select
                                required
                                class=INPUT_CLASS
                                disabled=submitting
                                prop:value=move || type_value(ctx.store.form().read().movement_type)
                                on:change=move |ev| {
                                    let t = event_target_value(&ev).parse::<MovementType>().ok();
                                    ctx.dispatch(Action::EditForm(FormField::Type(t)));
                                }
                            >
                                <option value="">"Seleccionar tipo..."</option>
                                {MovementType::ALL.into_iter().map(|t| view! {
                                    <option value=t.as_str()>{t.as_str()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="space-y-2">
                            <label class="text-sm font-medium text-gray-700">"Fecha y Hora"</label>
                            <input
                                type="datetime-local"
                                class=INPUT_CLASS
                                disabled=submitting
                                prop:value=move || ctx.store.form().read().timestamp.clone()
                                on:input=move |ev| {
                                    ctx.dispatch(Action::EditForm(FormField::Timestamp(event_target_value(&ev))));
                                }
                            />
                            <p class="text-xs text-gray-500">
                                "Si se deja vacío, se usará la fecha y hora actual"
                            </p>
                        </div>
                        <div class="space-y-2">
                            <label class="text-sm font-medium text-gray-700">"Observaciones"</label>
                            <textarea
                                class=format!("{INPUT_CLASS} resize-none")
                                rows="3"
                                placeholder="Notas sobre el movimiento"
                                disabled=submitting
                                prop:value=move || ctx.store.form().read().notes.clone()
                                on:input=move |ev| {
                                    ctx.dispatch(Action::EditForm(FormField::Notes(event_target_value(&ev))));
                                }
                            ></textarea>
                        </div>
                        <div class="flex gap-3 pt-4">
                            <button
                                type="button"
                                class="flex-1 bg-gray-100 hover:bg-gray-200 disabled:bg-gray-50 text-gray-700 py-2 px-4 rounded-lg font-medium transition-colors"
                                disabled=submitting
                                on:click=move |_| ctx.dispatch(Action::CloseModal)
                            >
                                "Cancelar"
                            </button>
                            <button
                                type="submit"
                                class="flex-1 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 text-white py-2 px-4 rounded-lg font-medium transition-colors"
                                disabled=submitting
                            >
                                {move || submit_label(submitting(), is_editing())}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Select value for the type; empty picks the placeholder
fn type_value(movement_type: Option<MovementType>) -> &'static str {
    movement_type.map(|t| t.as_str()).unwrap_or("")
}

fn submit_label(submitting: bool, editing: bool) -> &'static str {
    match (submitting, editing) {
        (true, _) => "Guardando...",
        (false, true) => "Actualizar",
        (false, false) => "Registrar",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(true, true), "Guardando...");
        assert_eq!(submit_label(false, true), "Actualizar");
        assert_eq!(submit_label(false, false), "Registrar");
    }

    #[test]
    fn test_unknown_type_selects_placeholder() {
        assert_eq!(type_value(None), "");
        assert_eq!(type_value(Some(MovementType::Inspeccion)), "Inspección");
        // the placeholder's value parses back to no type
        assert_eq!("".parse::<MovementType>().ok(), None);
    }
}
