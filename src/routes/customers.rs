use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateCustomerRequest, Customer, UpdateCustomerRequest},
    queries::customer_queries,
    utils::Payload,
};

pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    let customers = customer_queries::get_all(&state.db).await?;

    Ok(Json(customers))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Payload(req): Payload<CreateCustomerRequest>,
) -> Result<Json<Customer>> {
    let new = req.validate()?;
    let customer = customer_queries::create(&state.db, new).await?;

    Ok(Json(customer))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Customer>> {
    let customer = customer_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Customer not found".to_string()))?;

    Ok(Json(customer))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Payload(req): Payload<UpdateCustomerRequest>,
) -> Result<Json<Customer>> {
    let customer = customer_queries::update(&state.db, &req)
        .await?
        .ok_or(AppError::NotFound("Customer not found".to_string()))?;

    Ok(Json(customer))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Customer>> {
    let customer = customer_queries::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Customer not found".to_string()))?;

    Ok(Json(customer))
}
