//! Header Component

use leptos::prelude::*;

/// Top bar with the "new dish" trigger
#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <span class="dashboard-title">"Food Dashboard"</span>
            <button class="new-food-btn" on:click=move |_| on_open_add.run(())>
                "+ New dish"
            </button>
        </header>
    }
}
