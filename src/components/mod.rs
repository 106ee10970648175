//! UI Components
//!
//! Presentation only: each component gets data plus callbacks.

mod header;
mod modal;
mod food_form;
mod add_food_modal;
mod edit_food_modal;
mod food_card;

pub use header::Header;
pub use modal::Modal;
pub use food_form::{FoodForm, FoodFormValues};
pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
