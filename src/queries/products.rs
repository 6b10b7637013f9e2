// src/queries/products.rs
use sqlx::PgPool;

use crate::dtos::product::UpdateProductRequest;
use crate::error::Result;
use crate::models::product::{NewProduct, Product};

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock FROM products",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn insert(pool: &PgPool, product: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, stock)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, description, price, stock",
    )
    .bind(&product.name)
    .bind(product.description.as_deref())
    .bind(product.price)
    .bind(product.stock)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Partial update. Reads the current row, merges the patch over it and writes
/// every column back, so unset fields keep their stored values.
pub async fn update_by_id(
    pool: &PgPool,
    id: i32,
    patch: &UpdateProductRequest,
) -> Result<Option<Product>> {
    let current = match find_by_id(pool, id).await? {
        Some(product) => product,
        None => return Ok(None),
    };

    let updated = patch.merge(current);

    let product = sqlx::query_as::<_, Product>(
        "UPDATE products
         SET name = $1, description = $2, price = $3, stock = $4
         WHERE id = $5
         RETURNING id, name, description, price, stock",
    )
    .bind(&updated.name)
    .bind(updated.description.as_deref())
    .bind(updated.price)
    .bind(updated.stock)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "DELETE FROM products WHERE id = $1
         RETURNING id, name, description, price, stock",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}
