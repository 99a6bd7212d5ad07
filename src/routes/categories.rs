use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Category, CreateCategoryRequest, UpdateCategoryRequest},
    queries::category_queries,
    utils::Payload,
};

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = category_queries::get_all(&state.db).await?;

    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<AppState>,
    Payload(req): Payload<CreateCategoryRequest>,
) -> Result<Json<Category>> {
    let new = req.validate()?;
    let category = category_queries::create(&state.db, new).await?;

    Ok(Json(category))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>> {
    let category = category_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Category not found".to_string()))?;

    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<AppState>,
    Payload(req): Payload<UpdateCategoryRequest>,
) -> Result<Json<Category>> {
    let category = category_queries::update(&state.db, &req)
        .await?
        .ok_or(AppError::NotFound("Category not found".to_string()))?;

    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>> {
    let category = category_queries::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Category not found".to_string()))?;

    Ok(Json(category))
}
