//! Edit Food Modal Component

use leptos::prelude::*;

use crate::components::{FoodForm, FoodFormValues, Modal};
use crate::models::{FoodPatch, FoodRecord};

/// Edit form seeded from `editing_food`; reseeded whenever a different food is selected
#[component]
pub fn EditFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] editing_food: Signal<Option<FoodRecord>>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_update: Callback<FoodPatch>,
) -> impl IntoView {
    let submit = Callback::new(move |values: FoodFormValues| {
        on_update.run(values.into_patch());
        on_toggle.run(());
    });

    view! {
        <Modal is_open=is_open on_close=on_toggle>
            {move || {
                let initial = editing_food
                    .get()
                    .map(|food| FoodFormValues::from_food(&food))
                    .unwrap_or_default();
                view! {
                    <FoodForm title="Edit dish" submit_label="Save changes" initial=initial on_submit=submit />
                }
            }}
        </Modal>
    }
}
