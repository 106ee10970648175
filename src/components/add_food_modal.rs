//! Add Food Modal Component

use leptos::prelude::*;

use crate::components::{FoodForm, FoodFormValues, Modal};
use crate::models::NewFood;

#[component]
pub fn AddFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_add: Callback<NewFood>,
) -> impl IntoView {
    let submit = Callback::new(move |values: FoodFormValues| {
        on_add.run(values.into_new_food());
        on_toggle.run(());
    });

    view! {
        <Modal is_open=is_open on_close=on_toggle>
            <FoodForm title="New dish" submit_label="Add dish" on_submit=submit />
        </Modal>
    }
}
