// src/dtos/product.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::product::{NewProduct, Product};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>, // Some(Some(v)) set, Some(None) clear, None ignore
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub stock: Option<Option<i32>>,
}

// An absent key falls back to the field default (None); a present key,
// including an explicit null, comes through as Some.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl UpdateProductRequest {
    /// Merge this patch over an existing row. Unset fields keep the prior
    /// value; explicit nulls clear the nullable fields. `name` cannot be
    /// cleared, only replaced.
    pub fn merge(&self, current: Product) -> Product {
        Product {
            id: current.id,
            name: self.name.clone().unwrap_or(current.name),
            description: match &self.description {
                Some(value) => value.clone(),
                None => current.description,
            },
            price: match self.price {
                Some(value) => value,
                None => current.price,
            },
            stock: match self.stock {
                Some(value) => value,
                None => current.stock,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}
