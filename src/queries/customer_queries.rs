use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Customer, NewCustomer, UpdateCustomerRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(customer)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Customer>> {
    let customers = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(customers)
}

pub async fn create(pool: &PgPool, new: NewCustomer) -> Result<Customer> {
    let customer = sqlx::query_as::<_, Customer>(
        "INSERT INTO customers (name, date_of_birth, member_number, interests)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&new.name)
    .bind(new.date_of_birth)
    .bind(new.member_number)
    .bind(&new.interests)
    .fetch_one(pool)
    .await?;

    Ok(customer)
}

/// Partial update: omitted fields keep their stored value. Returns None
/// when no customer with that id exists; never inserts.
pub async fn update(pool: &PgPool, req: &UpdateCustomerRequest) -> Result<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(
        "UPDATE customers SET
            name = COALESCE($2, name),
            date_of_birth = COALESCE($3, date_of_birth),
            member_number = COALESCE($4, member_number),
            interests = COALESCE($5, interests)
         WHERE id = $1 RETURNING *",
    )
    .bind(req.id)
    .bind(&req.name)
    .bind(req.date_of_birth)
    .bind(req.member_number)
    .bind(&req.interests)
    .fetch_optional(pool)
    .await?;

    Ok(customer)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>("DELETE FROM customers WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(customer)
}
