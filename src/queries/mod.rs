pub mod category_queries;
pub mod customer_queries;
pub mod product_queries;
