//! Foods API
//!
//! Async interface to the remote `/foods` resource, and its HTTP implementation.

mod error;
mod foods;

use async_trait::async_trait;

use crate::models::{FoodRecord, NewFood};

pub use error::ApiError;
pub use foods::HttpFoodApi;

#[cfg(test)]
use mockall::automock;

/// Remote CRUD operations on foods
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list(&self) -> Result<Vec<FoodRecord>, ApiError>;

    /// `POST /foods`, returns the record with its assigned id
    async fn create(&self, food: &NewFood) -> Result<FoodRecord, ApiError>;

    /// `PUT /foods/{id}` with the full record
    async fn update(&self, id: u32, food: &FoodRecord) -> Result<FoodRecord, ApiError>;

    /// `DELETE /foods/{id}`
    async fn delete(&self, id: u32) -> Result<(), ApiError>;
}
