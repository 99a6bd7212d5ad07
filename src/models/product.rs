use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::{Category, fields}, validation};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(rename = "category")]
    pub category_id: Option<i32>,
}

/// Product with its category reference expanded into the full document.
/// A dangling or absent reference renders as null.
#[derive(Debug, Serialize)]
pub struct ProductWithCategory {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Option<Category>,
}

impl ProductWithCategory {
    pub fn new(product: Product, category: Option<Category>) -> Self {
        Self {
            id: product.id,
            code: product.code,
            name: product.name,
            description: product.description,
            price: product.price,
            category,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "fields::int_opt")]
    pub category: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: i32,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "fields::decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "fields::int_opt")]
    pub category: Option<i32>,
}

/// Validated product fields ready for insertion.
#[derive(Debug)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: Option<i32>,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct> {
        match (self.code, self.name, self.description, self.price) {
            (Some(code), Some(name), Some(description), Some(price)) => Ok(NewProduct {
                code,
                name,
                description,
                price,
                category_id: self.category,
            }),
            (code, name, description, price) => Err(validation::missing_error(&[
                ("code", code.is_some()),
                ("name", name.is_some()),
                ("description", description.is_some()),
                ("price", price.is_some()),
            ])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_accepts_string_price() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "code": "BV1",
            "name": "Cola",
            "description": "Soda",
            "price": "1.50",
            "category": 3
        }))
        .unwrap();

        let new = req.validate().unwrap();
        assert_eq!(new.price, "1.50".parse().unwrap());
        assert_eq!(new.category_id, Some(3));
    }

    #[test]
    fn validate_names_every_missing_field() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "code": "BV1",
            "description": "Soda"
        }))
        .unwrap();

        let err = req.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required fields: name, price"
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "code": "",
            "name": "Cola",
            "description": "Soda",
            "price": ""
        }))
        .unwrap();

        let err = req.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required fields: code, price"
        );
    }

    #[test]
    fn caller_supplied_id_is_ignored_on_create() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "id": 99,
            "code": "BV1",
            "name": "Cola",
            "description": "Soda",
            "price": 1.5
        }))
        .unwrap();

        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_category_reference_counts_as_uncategorized() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "code": "BV1",
            "name": "Cola",
            "description": "Soda",
            "price": "1.50",
            "category": ""
        }))
        .unwrap();

        assert_eq!(req.validate().unwrap().category_id, None);
    }

    #[test]
    fn update_payload_carries_id_and_partial_fields() {
        let req: UpdateProductRequest = serde_json::from_value(json!({
            "id": 7,
            "price": "2.25"
        }))
        .unwrap();

        assert_eq!(req.id, 7);
        assert_eq!(req.price, Some("2.25".parse().unwrap()));
        assert_eq!(req.name, None);
    }
}
