use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Json,
    routing::get,
};
use diesel::prelude::*;
use pizzeria_restaurant_service::{
    models::{Pizza, Restaurant, RestaurantPizza},
    schema::{pizzas, restaurant_pizzas, restaurants},
    serializer::{RestaurantDetails, RestaurantField, RestaurantRepr, serialize_restaurant_details},
};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::models::ApiErrorResponse;

use super::AppState;

const RESTAURANT_FIELDS: [RestaurantField; 3] = [
    RestaurantField::Id,
    RestaurantField::Name,
    RestaurantField::Address,
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

/// Path ids that are not integers address no restaurant.
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound("Restaurant"))
}

fn find_restaurant(conn: &mut SqliteConnection, id: i32) -> Result<Restaurant, ApiError> {
    restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first::<Restaurant>(conn)
        .optional()?
        .ok_or(ApiError::NotFound("Restaurant"))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<RestaurantRepr>),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantRepr>>, ApiError> {
    let results = state.transaction(|conn| {
        Ok(restaurants::table
            .select(Restaurant::as_select())
            .order(restaurants::id.asc())
            .load::<Restaurant>(conn)?)
    })?;

    Ok(Json(
        results
            .iter()
            .map(|r| r.to_repr(Some(&RESTAURANT_FIELDS)))
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetails),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetails>, ApiError> {
    let id = restaurant_id(path)?;

    let details = state.transaction(|conn| {
        let restaurant = find_restaurant(conn, id)?;
        let menu = restaurant_pizzas::table
            .inner_join(pizzas::table)
            .filter(restaurant_pizzas::restaurant_id.eq(restaurant.id))
            .order(restaurant_pizzas::id.asc())
            .select((RestaurantPizza::as_select(), Pizza::as_select()))
            .load::<(RestaurantPizza, Pizza)>(conn)?;

        Ok(serialize_restaurant_details(&restaurant, &menu))
    })?;

    Ok(Json(details))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its pizzas deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;

    let removed_pizzas = state.transaction(|conn| {
        let restaurant = find_restaurant(conn, id)?;
        let removed = diesel::delete(
            restaurant_pizzas::table.filter(restaurant_pizzas::restaurant_id.eq(restaurant.id)),
        )
        .execute(conn)?;
        diesel::delete(restaurants::table.find(restaurant.id)).execute(conn)?;
        Ok(removed)
    })?;
    info!(restaurant_id = id, removed_pizzas, "deleted restaurant");

    Ok(StatusCode::NO_CONTENT)
}
