use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, NewCategory, UpdateCategoryRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Fetch a set of categories keyed by id, for reference expansion.
pub async fn find_by_ids(pool: &PgPool, ids: &[i32]) -> Result<HashMap<i32, Category>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await?;

    Ok(categories.into_iter().map(|c| (c.id, c)).collect())
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

pub async fn create(pool: &PgPool, new: NewCategory) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, display_order) VALUES ($1, $2) RETURNING *",
    )
    .bind(&new.name)
    .bind(new.order)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

/// Partial update: omitted fields keep their stored value. Returns None
/// when no category with that id exists.
pub async fn update(pool: &PgPool, req: &UpdateCategoryRequest) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "UPDATE categories SET
            name = COALESCE($2, name),
            display_order = COALESCE($3, display_order)
         WHERE id = $1 RETURNING *",
    )
    .bind(req.id)
    .bind(&req.name)
    .bind(req.order)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "DELETE FROM categories WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}
