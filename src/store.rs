//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FoodRecord;

/// Which modal form is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveModal {
    #[default]
    Closed,
    Add,
    Edit,
}

/// Dashboard view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Foods in display order
    pub foods: Vec<FoodRecord>,
    /// Record seeding the edit form
    pub editing_food: Option<FoodRecord>,
    pub active_modal: ActiveModal,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, foods: Vec<FoodRecord>) {
        self.foods = foods;
    }

    pub fn append(&mut self, food: FoodRecord) {
        self.foods.push(food);
    }

    /// Replace the record whose id matches `updated.id`, keeping order
    pub fn replace_matching(&mut self, updated: FoodRecord) {
        if let Some(food) = self.foods.iter_mut().find(|food| food.id == updated.id) {
            *food = updated;
        }
    }

    /// Remove every record with this id
    pub fn remove_by_id(&mut self, id: u32) {
        self.foods.retain(|food| food.id != Some(id));
    }

    pub fn find(&self, id: u32) -> Option<&FoodRecord> {
        self.foods.iter().find(|food| food.id == Some(id))
    }

    /// Close whatever is open; open `kind` only when nothing is.
    ///
    /// Toggling add while edit is open closes edit rather than switching.
    pub fn toggle_modal(&mut self, kind: ActiveModal) {
        self.active_modal = match self.active_modal {
            ActiveModal::Closed => kind,
            _ => ActiveModal::Closed,
        };
    }

    pub fn select_for_edit(&mut self, food: FoodRecord) {
        self.editing_food = Some(food);
        self.active_modal = ActiveModal::Edit;
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Where sync handlers read and write dashboard state
pub trait StateHandle {
    fn snapshot<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;
    fn apply(&self, f: impl FnOnce(&mut DashboardState));
}

impl StateHandle for DashboardStore {
    fn snapshot<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.with_untracked(f)
    }

    fn apply(&self, f: impl FnOnce(&mut DashboardState)) {
        self.update(f);
    }
}

impl StateHandle for Rc<RefCell<DashboardState>> {
    fn snapshot<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.borrow())
    }

    fn apply(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.borrow_mut());
    }
}
