use diesel::prelude::*;
use tracing::info;

use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};
use crate::StoreError;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const RESTAURANT_PIZZAS: [(usize, usize, i32); 3] = [(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replaces the content of every table with the sample data set.
pub fn seed(conn: &mut SqliteConnection) -> Result<SeedSummary, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        info!("Deleting data...");
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;

        info!("Creating restaurants...");
        let restaurant_ids = RESTAURANTS
            .iter()
            .map(|&(name, address)| {
                diesel::insert_into(restaurants::table)
                    .values(NewRestaurant { name, address })
                    .returning(restaurants::id)
                    .get_result::<i32>(conn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Creating pizzas...");
        let pizza_ids = PIZZAS
            .iter()
            .map(|&(name, ingredients)| {
                diesel::insert_into(pizzas::table)
                    .values(NewPizza { name, ingredients })
                    .returning(pizzas::id)
                    .get_result::<i32>(conn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Creating restaurant pizzas...");
        let restaurant_pizzas = RESTAURANT_PIZZAS
            .iter()
            .map(|&(restaurant, pizza, price)| NewRestaurantPizza {
                price,
                restaurant_id: restaurant_ids[restaurant],
                pizza_id: pizza_ids[pizza],
            })
            .collect::<Vec<_>>();
        let inserted = diesel::insert_into(restaurant_pizzas::table)
            .values(&restaurant_pizzas)
            .execute(conn)?;

        Ok(SeedSummary {
            restaurants: restaurant_ids.len(),
            pizzas: pizza_ids.len(),
            restaurant_pizzas: inserted,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pizza, Restaurant, RestaurantPizza};
    use crate::{establish_in_memory_pool, run_migrations};

    #[test]
    fn test_seed() {
        let pool = establish_in_memory_pool().unwrap();
        let conn = &mut pool.get().unwrap();
        run_migrations(conn).unwrap();

        let summary = seed(conn).unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                restaurants: 3,
                pizzas: 3,
                restaurant_pizzas: 3,
            }
        );

        let names = pizzas::table
            .select(Pizza::as_select())
            .order(pizzas::id)
            .load(conn)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Emma", "Geri", "Melanie"]);

        let shack = restaurants::table
            .filter(restaurants::name.eq("Karen's Pizza Shack"))
            .select(Restaurant::as_select())
            .first(conn)
            .unwrap();
        let menu = RestaurantPizza::belonging_to(&shack)
            .select(RestaurantPizza::as_select())
            .load(conn)
            .unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].price, 1);
    }

    #[test]
    fn test_seed_twice_replaces_data() {
        let pool = establish_in_memory_pool().unwrap();
        let conn = &mut pool.get().unwrap();
        run_migrations(conn).unwrap();

        seed(conn).unwrap();
        seed(conn).unwrap();

        let count: i64 = restaurant_pizzas::table.count().get_result(conn).unwrap();
        assert_eq!(count, 3);
        let count: i64 = restaurants::table.count().get_result(conn).unwrap();
        assert_eq!(count, 3);

        let restaurant_ids = restaurants::table
            .select(restaurants::id)
            .order(restaurants::id)
            .load::<i32>(conn)
            .unwrap();
        assert_eq!(restaurant_ids, vec![1, 2, 3]);
        let pizza_ids = pizzas::table
            .select(pizzas::id)
            .order(pizzas::id)
            .load::<i32>(conn)
            .unwrap();
        assert_eq!(pizza_ids, vec![1, 2, 3]);
        let links = restaurant_pizzas::table
            .select(RestaurantPizza::as_select())
            .order(restaurant_pizzas::id)
            .load::<RestaurantPizza>(conn)
            .unwrap()
            .into_iter()
            .map(|rp| (rp.id, rp.restaurant_id, rp.pizza_id))
            .collect::<Vec<_>>();
        assert_eq!(links, vec![(1, 1, 1), (2, 2, 2), (3, 3, 3)]);
    }
}
