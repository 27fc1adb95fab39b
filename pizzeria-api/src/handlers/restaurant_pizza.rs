use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::post,
};
use diesel::prelude::*;
use pizzeria_restaurant_service::{
    models::{Pizza, Restaurant, RestaurantPizza},
    schema::{pizzas, restaurant_pizzas, restaurants},
    serializer::RestaurantPizzaRepr,
};
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Restaurant pizza created", body = RestaurantPizzaRepr),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaRepr>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        debug!("rejected request body: {e}");
        ApiError::ValidationFailed
    })?;
    let new_restaurant_pizza = payload.validate()?;

    let created = state.transaction(|conn| {
        let pizza = pizzas::table
            .find(new_restaurant_pizza.pizza_id)
            .select(Pizza::as_select())
            .first::<Pizza>(conn)
            .optional()?;
        let restaurant = restaurants::table
            .find(new_restaurant_pizza.restaurant_id)
            .select(Restaurant::as_select())
            .first::<Restaurant>(conn)
            .optional()?;
        let (Some(pizza), Some(restaurant)) = (pizza, restaurant) else {
            return Err(ApiError::ValidationFailed);
        };

        let restaurant_pizza = diesel::insert_into(restaurant_pizzas::table)
            .values(&new_restaurant_pizza)
            .returning(RestaurantPizza::as_returning())
            .get_result::<RestaurantPizza>(conn)?;

        Ok(restaurant_pizza.to_repr(&pizza, &restaurant))
    })?;
    info!(
        id = created.id,
        pizza_id = created.pizza_id,
        restaurant_id = created.restaurant_id,
        "created restaurant pizza"
    );

    Ok((StatusCode::CREATED, Json(created)))
}
