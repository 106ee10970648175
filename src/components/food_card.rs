//! Food Card Component
//!
//! One food in the list, with edit/delete and the availability switch.

use leptos::prelude::*;

use crate::models::FoodRecord;

#[component]
pub fn FoodCard(
    food: FoodRecord,
    #[prop(into)] on_edit: Callback<FoodRecord>,
    #[prop(into)] on_delete: Callback<Option<u32>>,
    #[prop(into)] on_toggle_available: Callback<u32>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let price = format!("R$ {:.2}", food.price);
    let edit_target = food.clone();

    view! {
        <div class=move || if available { "food-card" } else { "food-card unavailable" }>
            <header>
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="food-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="food-price"><b>{price}</b></p>
            </section>
            <section class="food-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon delete-btn"
                        on:click=move |_| on_delete.run(id)
                    >
                        "×"
                    </button>
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            prop:checked=available
                            on:change=move |ev| {
                                // Keep showing the stored flag; a successful toggle re-renders the card
                                event_target::<web_sys::HtmlInputElement>(&ev).set_checked(available);
                                if let Some(id) = id {
                                    on_toggle_available.run(id);
                                }
                            }
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
