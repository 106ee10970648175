//! Frontend Models
//!
//! Data structures matching the `/foods` API resources.

use serde::{Deserialize, Deserializer, Serialize};

/// Food record as stored by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Assigned by the API, absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub available: bool,
}

impl FoodRecord {
    /// Copy of this record with every field the patch carries overwritten
    pub fn merged_with(&self, patch: &FoodPatch) -> FoodRecord {
        FoodRecord {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
            price: patch.price.unwrap_or(self.price),
            available: patch.available.unwrap_or(self.available),
        }
    }
}

/// Input for creating a food (a record minus its id)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub available: bool,
}

impl NewFood {
    /// Creation payload: new foods always start out available
    pub fn into_payload(self) -> NewFood {
        NewFood {
            available: true,
            ..self
        }
    }
}

/// Partial update applied on top of the record being edited
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

/// Accepts `9.5` as well as `"9.5"`; form-backed APIs often keep the raw text.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) if s.trim().is_empty() => Ok(0.0),
        RawPrice::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid price {:?}: {}", s, e))),
    }
}
