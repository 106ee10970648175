//! Food Dashboard App
//!
//! Owns the dashboard state and wires it to the presentation components.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpFoodApi;
use crate::components::{AddFoodModal, EditFoodModal, FoodCard, Header};
use crate::config::DashboardConfig;
use crate::context::DashboardActions;
use crate::dashboard::Dashboard;
use crate::store::{ActiveModal, DashboardState, DashboardStateStoreFields};

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = Store::new(DashboardState::new());
    let api = HttpFoodApi::new(config.api_base_url);
    let dashboard = StoredValue::new_local(Dashboard::new(api, store));
    let actions = DashboardActions::new(dashboard);

    // Load foods on mount
    let loader = dashboard.get_value();
    spawn_local(async move {
        let _ = loader.load_all().await;
    });

    let toggle_add = Callback::new(move |_: ()| actions.on_toggle_modal.run(ActiveModal::Add));
    let toggle_edit = Callback::new(move |_: ()| actions.on_toggle_modal.run(ActiveModal::Edit));

    let add_open = Signal::derive(move || store.active_modal().get() == ActiveModal::Add);
    let edit_open = Signal::derive(move || store.active_modal().get() == ActiveModal::Edit);
    let editing_food = Signal::derive(move || store.editing_food().get());

    view! {
        <Header on_open_add=toggle_add />

        <AddFoodModal
            is_open=add_open
            on_toggle=toggle_add
            on_add=actions.on_add
        />
        <EditFoodModal
            is_open=edit_open
            editing_food=editing_food
            on_toggle=toggle_edit
            on_update=actions.on_update
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                // Key on every displayed field so an updated food re-renders
                key=|food| {
                    (
                        food.id,
                        food.name.clone(),
                        food.description.clone(),
                        food.image.clone(),
                        food.price.to_bits(),
                        food.available,
                    )
                }
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_edit=actions.on_select_for_edit
                            on_delete=actions.on_delete
                            on_toggle_available=actions.on_toggle_available
                        />
                    }
                }
            />
        </div>
    }
}
