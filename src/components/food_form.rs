//! Food Form Component
//!
//! Controlled inputs for a food's descriptive fields, used by both modals.

use leptos::prelude::*;

use crate::models::{FoodPatch, FoodRecord, NewFood};

/// Raw form values as typed by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FoodFormValues {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodFormValues {
    pub fn from_food(food: &FoodRecord) -> Self {
        Self {
            name: food.name.clone(),
            image: food.image.clone(),
            price: food.price.to_string(),
            description: food.description.clone(),
        }
    }

    /// Unparseable prices go out as 0; the API decides what is valid.
    fn parsed_price(&self) -> f64 {
        self.price.trim().replace(',', ".").parse().unwrap_or_default()
    }

    pub fn into_new_food(self) -> NewFood {
        let price = self.parsed_price();
        NewFood {
            name: self.name,
            description: self.description,
            image: self.image,
            price,
            available: true,
        }
    }

    /// Availability is not part of the form, so the patch leaves it alone
    pub fn into_patch(self) -> FoodPatch {
        let price = self.parsed_price();
        FoodPatch {
            name: Some(self.name),
            description: Some(self.description),
            image: Some(self.image),
            price: Some(price),
            available: None,
        }
    }
}

#[component]
pub fn FoodForm(
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    #[prop(optional)] initial: FoodFormValues,
    #[prop(into)] on_submit: Callback<FoodFormValues>,
) -> impl IntoView {
    let (name, set_name) = signal(initial.name);
    let (image, set_image) = signal(initial.image);
    let (price, set_price) = signal(initial.price);
    let (description, set_description) = signal(initial.description);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(FoodFormValues {
            name: name.get(),
            image: image.get(),
            price: price.get(),
            description: description.get(),
        });
    };

    view! {
        <form class="food-form" on:submit=submit>
            <h1>{title}</h1>
            <input
                type="text"
                placeholder="Paste the image URL"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Ex: Moda Italiana"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Ex: 19.90"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" class="food-form-submit">{submit_label}</button>
        </form>
    }
}
