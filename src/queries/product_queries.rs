use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductWithCategory, UpdateProductRequest},
    queries::category_queries,
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Find a product and expand its category reference. A dangling reference
/// leaves the category null rather than failing.
pub async fn find_with_category(pool: &PgPool, id: i32) -> Result<Option<ProductWithCategory>> {
    let Some(product) = find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let category = match product.category_id {
        Some(category_id) => category_queries::find_by_id(pool, category_id).await?,
        None => None,
    };

    Ok(Some(ProductWithCategory::new(product, category)))
}

/// All products with category references expanded in one batch lookup.
pub async fn get_all_with_categories(pool: &PgPool) -> Result<Vec<ProductWithCategory>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
        .fetch_all(pool)
        .await?;

    let category_ids: Vec<i32> = products.iter().filter_map(|p| p.category_id).collect();
    let categories = category_queries::find_by_ids(pool, &category_ids).await?;

    let expanded = products
        .into_iter()
        .map(|product| {
            let category = product
                .category_id
                .and_then(|id| categories.get(&id).cloned());
            ProductWithCategory::new(product, category)
        })
        .collect();

    Ok(expanded)
}

pub async fn create(pool: &PgPool, new: NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (code, name, description, price, category_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&new.code)
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.price)
    .bind(new.category_id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Partial update: omitted fields keep their stored value. Returns None
/// when no product with that id exists; never inserts.
pub async fn update(pool: &PgPool, req: &UpdateProductRequest) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products SET
            code = COALESCE($2, code),
            name = COALESCE($3, name),
            description = COALESCE($4, description),
            price = COALESCE($5, price),
            category_id = COALESCE($6, category_id)
         WHERE id = $1 RETURNING *",
    )
    .bind(req.id)
    .bind(&req.code)
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(req.category)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("DELETE FROM products WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}
