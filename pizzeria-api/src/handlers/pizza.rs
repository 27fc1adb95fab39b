use axum::{Router, extract::State, response::Json, routing::get};
use diesel::prelude::*;
use pizzeria_restaurant_service::{
    models::Pizza,
    schema::pizzas,
    serializer::{PizzaField, PizzaRepr},
};
use tracing::instrument;

use crate::error::ApiError;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = Vec<PizzaRepr>),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<PizzaRepr>>, ApiError> {
    let results = state.transaction(|conn| {
        Ok(pizzas::table
            .select(Pizza::as_select())
            .order(pizzas::id.asc())
            .load::<Pizza>(conn)?)
    })?;

    Ok(Json(
        results
            .iter()
            .map(|p| p.to_repr(Some(&[PizzaField::Id, PizzaField::Name, PizzaField::Ingredients])))
            .collect(),
    ))
}
