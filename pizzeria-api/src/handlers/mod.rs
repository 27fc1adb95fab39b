pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use diesel::{Connection, SqliteConnection};
use pizzeria_restaurant_service::DbPool;
use pizzeria_restaurant_service::serializer::{
    PizzaRepr, RestaurantDetails, RestaurantPizzaRepr, RestaurantRepr,
};
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::models::*;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Runs `f` inside one transaction on a pooled connection. The
    /// transaction rolls back when `f` fails and the connection goes back to
    /// the pool on every path.
    pub(crate) fn transaction<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, ApiError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction(f)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            RestaurantRepr,
            PizzaRepr,
            RestaurantPizzaRepr,
            RestaurantDetails,
            CreateRestaurantPizzaRequest,
            ApiErrorResponse,
            ValidationErrorResponse,
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Priced pizza offers of restaurants")
    ),
    info(
        title = "Pizzeria API",
        description = "Restaurants, pizzas and the prices restaurants charge for them",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
