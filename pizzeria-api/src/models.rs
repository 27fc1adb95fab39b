use pizzeria_restaurant_service::models::NewRestaurantPizza;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 30;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price of the pizza at the restaurant, between 1 and 30
    pub price: Option<i64>,
    /// Identifier of an existing pizza
    pub pizza_id: Option<i64>,
    /// Identifier of an existing restaurant
    pub restaurant_id: Option<i64>,
}

impl CreateRestaurantPizzaRequest {
    /// Checks presence and range of every field. Whether the referenced rows
    /// exist is left to the handler.
    pub fn validate(&self) -> Result<NewRestaurantPizza, ApiError> {
        let (Some(price), Some(pizza_id), Some(restaurant_id)) =
            (self.price, self.pizza_id, self.restaurant_id)
        else {
            return Err(ApiError::ValidationFailed);
        };
        if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
            return Err(ApiError::ValidationFailed);
        }

        Ok(NewRestaurantPizza {
            price: i32::try_from(price).map_err(|_| ApiError::ValidationFailed)?,
            pizza_id: i32::try_from(pizza_id).map_err(|_| ApiError::ValidationFailed)?,
            restaurant_id: i32::try_from(restaurant_id).map_err(|_| ApiError::ValidationFailed)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Always `["validation errors"]`
    pub errors: Vec<String>,
}
