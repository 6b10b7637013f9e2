// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::instrument;

use crate::dtos::product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::error::AppError;
use crate::models::product::NewProduct;
use crate::queries;
use crate::state::AppState;

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = queries::products::list_all(&state.db_pool).await?;
    let response = products.into_iter().map(ProductResponse::from).collect();

    Ok(Json(response))
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = queries::products::find_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with id {} does not exist.", id)))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Product name is required"));
    }

    let product = queries::products::insert(&state.db_pool, &NewProduct::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PUT/PATCH /products/{id} - Partially update product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = queries::products::update_by_id(&state.db_pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with id '{}' does not exist.", id)))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let product = queries::products::delete_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with id '{}' does not exist.", id)))?;

    Ok(Json(json!({
        "message": format!("Product with name '{}' deleted successfully.", product.name),
    })))
}
