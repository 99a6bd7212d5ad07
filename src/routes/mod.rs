mod categories;
mod customers;
mod health;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/product",
            get(products::list_products)
                .post(products::create_product)
                .put(products::update_product)
                .patch(products::update_product),
        )
        .route(
            "/product/{id}",
            get(products::get_product).delete(products::delete_product),
        )
        .route(
            "/category",
            get(categories::list_categories)
                .post(categories::create_category)
                .put(categories::update_category)
                .patch(categories::update_category),
        )
        .route(
            "/category/{id}",
            get(categories::get_category).delete(categories::delete_category),
        )
        .route(
            "/customer",
            get(customers::list_customers)
                .post(customers::create_customer)
                .put(customers::update_customer)
                .patch(customers::update_customer),
        )
        .route(
            "/customer/{id}",
            get(customers::get_customer).delete(customers::delete_customer),
        )
}
