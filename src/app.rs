//! SGCP Frontend App
//!
//! Page shell around the movements screen.

use leptos::prelude::*;

use crate::components::MovementsView;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::load());
    provide_context(ctx);

    // Load on mount
    Effect::new(move |_| ctx.reload());

    view! {
        <div class="min-h-screen bg-gray-50">
            <main class="max-w-7xl mx-auto p-6 space-y-6">
                <h2 class="text-2xl font-bold text-gray-900">"Movimientos"</h2>
                <MovementsView />
            </main>
        </div>
    }
}
