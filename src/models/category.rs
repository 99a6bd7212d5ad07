use serde::{Deserialize, Serialize};

use crate::{error::Result, models::fields, validation};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "display_order")]
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "fields::int_opt")]
    pub order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub id: i32,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "fields::int_opt")]
    pub order: Option<i32>,
}

/// Validated category fields ready for insertion.
#[derive(Debug)]
pub struct NewCategory {
    pub name: String,
    pub order: i32,
}

impl CreateCategoryRequest {
    pub fn validate(self) -> Result<NewCategory> {
        match self.name {
            Some(name) => Ok(NewCategory {
                name,
                order: self.order.unwrap_or(0),
            }),
            None => Err(validation::missing_error(&[("name", false)])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_requires_name() {
        let req: CreateCategoryRequest = serde_json::from_value(json!({ "order": 3 })).unwrap();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn order_defaults_to_zero() {
        let req: CreateCategoryRequest =
            serde_json::from_value(json!({ "name": "Beverages" })).unwrap();
        let new = req.validate().unwrap();
        assert_eq!(new.name, "Beverages");
        assert_eq!(new.order, 0);
    }

    #[test]
    fn order_accepts_numeric_string() {
        let req: CreateCategoryRequest =
            serde_json::from_value(json!({ "name": "Beverages", "order": "5" })).unwrap();
        assert_eq!(req.validate().unwrap().order, 5);
    }

    #[test]
    fn serializes_with_order_key() {
        let category = Category {
            id: 1,
            name: "Beverages".to_string(),
            order: 2,
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value, json!({ "id": 1, "name": "Beverages", "order": 2 }));
    }
}
