//! HTTP client for the `/foods` resource.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{ApiError, FoodApi};
use crate::models::{FoodRecord, NewFood};

const FOODS_PATH: &str = "foods";

#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    base_url: String,
}

impl HttpFoodApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), FOODS_PATH)
    }

    fn member_url(&self, id: u32) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list(&self) -> Result<Vec<FoodRecord>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, food: &NewFood) -> Result<FoodRecord, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(food)
            .send()
            .await?;
        let response = Self::handle_response_status(response).await?;
        let created: FoodRecord = response.json().await?;
        if created.id.is_none() {
            return Err(ApiError::MissingId);
        }
        Ok(created)
    }

    async fn update(&self, id: u32, food: &FoodRecord) -> Result<FoodRecord, ApiError> {
        let response = self
            .client
            .put(self.member_url(id))
            .json(food)
            .send()
            .await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let response = self.client.delete(self.member_url(id)).send().await?;
        Self::handle_response_status(response).await?;
        Ok(())
    }
}
