//! Dashboard Actions
//!
//! Named callbacks handed to the presentation components. They are the only
//! way a component reaches the controller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpFoodApi;
use crate::dashboard::Dashboard;
use crate::models::{FoodPatch, FoodRecord, NewFood};
use crate::store::{ActiveModal, DashboardStore};

/// The controller as wired in the browser
pub type LiveDashboard = Dashboard<HttpFoodApi, DashboardStore>;

#[derive(Clone, Copy)]
pub struct DashboardActions {
    pub on_add: Callback<NewFood>,
    pub on_update: Callback<FoodPatch>,
    pub on_delete: Callback<Option<u32>>,
    pub on_select_for_edit: Callback<FoodRecord>,
    pub on_toggle_modal: Callback<ActiveModal>,
    pub on_toggle_available: Callback<u32>,
}

impl DashboardActions {
    pub fn new(dashboard: StoredValue<LiveDashboard, LocalStorage>) -> Self {
        // Add/update/toggle failures are logged by the handlers themselves
        let on_add = Callback::new(move |food: NewFood| {
            let dashboard = dashboard.get_value();
            spawn_local(async move {
                let _ = dashboard.add(food).await;
            });
        });

        let on_update = Callback::new(move |patch: FoodPatch| {
            let dashboard = dashboard.get_value();
            spawn_local(async move {
                let _ = dashboard.update(patch).await;
            });
        });

        let on_delete = Callback::new(move |id: Option<u32>| {
            let dashboard = dashboard.get_value();
            spawn_local(async move {
                if let Err(e) = dashboard.delete(id).await {
                    log::error!("Failed to delete food {:?}: {}", id, e);
                }
            });
        });

        let on_toggle_available = Callback::new(move |id: u32| {
            let dashboard = dashboard.get_value();
            spawn_local(async move {
                let _ = dashboard.toggle_available(id).await;
            });
        });

        let on_select_for_edit = Callback::new(move |food: FoodRecord| {
            dashboard.with_value(|d| d.select_for_edit(food));
        });

        let on_toggle_modal = Callback::new(move |kind: ActiveModal| {
            dashboard.with_value(|d| d.toggle_modal(kind));
        });

        Self {
            on_add,
            on_update,
            on_delete,
            on_select_for_edit,
            on_toggle_modal,
            on_toggle_available,
        }
    }
}
