use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::fields, validation};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "memberNumber")]
    pub member_number: Option<i32>,
    pub interests: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub name: Option<String>,
    #[serde(rename = "dateOfBirth", default, deserialize_with = "fields::date_opt")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "memberNumber", default, deserialize_with = "fields::int_opt")]
    pub member_number: Option<i32>,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub interests: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub id: i32,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub name: Option<String>,
    #[serde(rename = "dateOfBirth", default, deserialize_with = "fields::date_opt")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "memberNumber", default, deserialize_with = "fields::int_opt")]
    pub member_number: Option<i32>,
    #[serde(default, deserialize_with = "fields::text_opt")]
    pub interests: Option<String>,
}

/// Validated customer fields ready for insertion.
#[derive(Debug)]
pub struct NewCustomer {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub member_number: Option<i32>,
    pub interests: Option<String>,
}

impl CreateCustomerRequest {
    pub fn validate(self) -> Result<NewCustomer> {
        match self.name {
            Some(name) => Ok(NewCustomer {
                name,
                date_of_birth: self.date_of_birth,
                member_number: self.member_number,
                interests: self.interests,
            }),
            None => Err(validation::missing_error(&[("name", false)])),
        }
    }
}
