use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateProductRequest, Product, ProductWithCategory, UpdateProductRequest},
    queries::product_queries,
    utils::Payload,
};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductWithCategory>>> {
    let products = product_queries::get_all_with_categories(&state.db).await?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Payload(req): Payload<CreateProductRequest>,
) -> Result<Json<Product>> {
    let new = req.validate()?;
    let product = product_queries::create(&state.db, new).await?;

    Ok(Json(product))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductWithCategory>> {
    let product = product_queries::find_with_category(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Payload(req): Payload<UpdateProductRequest>,
) -> Result<Json<Product>> {
    let product = product_queries::update(&state.db, &req)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = product_queries::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}
