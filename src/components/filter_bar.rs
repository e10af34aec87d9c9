//! Filter Bar Component
//!
//! "Todos" plus one button per movement type.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::TypeFilter;
use crate::models::MovementType;
use crate::store::{Action, MovementsStateStoreFields};

const BUTTON_CLASS: &str = "px-3 py-2 text-sm rounded-lg border transition-colors";

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    let filters: Vec<TypeFilter> = std::iter::once(TypeFilter::All)
        .chain(MovementType::ALL.into_iter().map(TypeFilter::Only))
        .collect();

    view! {
        <div class="flex gap-1 flex-wrap">
            {filters.into_iter().map(|filter| {
                let is_selected = move || ctx.store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_selected() {
                            format!("{BUTTON_CLASS} bg-blue-600 text-white border-blue-600")
                        } else {
                            format!("{BUTTON_CLASS} border-gray-200 hover:bg-gray-50")
                        }
                        on:click=move |_| ctx.dispatch(Action::SetFilter(filter))
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
