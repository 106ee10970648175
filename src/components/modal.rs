//! Modal Component
//!
//! Overlay shell shared by the add and edit forms.

use leptos::prelude::*;

/// Renders `children` in an overlay while `is_open` holds.
/// Clicking the backdrop or the × button runs `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
