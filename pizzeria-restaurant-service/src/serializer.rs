//! JSON representations of the stored entities.
//!
//! `Restaurant` and `Pizza` can be projected onto a subset of their fields;
//! fields left out of the allow-list are omitted from the serialized object.
//! An association always expands both of its ends.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantField {
    Id,
    Name,
    Address,
}

impl RestaurantField {
    pub const ALL: [RestaurantField; 3] = [Self::Id, Self::Name, Self::Address];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaField {
    Id,
    Name,
    Ingredients,
}

impl PizzaField {
    pub const ALL: [PizzaField; 3] = [Self::Id, Self::Name, Self::Ingredients];
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, ToSchema)]
pub struct PizzaRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comma separated ingredient list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaRepr {
    pub id: i32,
    pub price: i32,
    pub pizza: PizzaRepr,
    pub restaurant: RestaurantRepr,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantDetails {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaRepr>,
}

impl models::Restaurant {
    /// Projects the restaurant onto `only`, or onto every field when `None`.
    pub fn to_repr(&self, only: Option<&[RestaurantField]>) -> RestaurantRepr {
        let mut repr = RestaurantRepr::default();
        for field in only.unwrap_or(&RestaurantField::ALL) {
            match field {
                RestaurantField::Id => repr.id = Some(self.id),
                RestaurantField::Name => repr.name = Some(self.name.clone()),
                RestaurantField::Address => repr.address = Some(self.address.clone()),
            }
        }
        repr
    }
}

impl models::Pizza {
    /// Projects the pizza onto `only`, or onto every field when `None`.
    pub fn to_repr(&self, only: Option<&[PizzaField]>) -> PizzaRepr {
        let mut repr = PizzaRepr::default();
        for field in only.unwrap_or(&PizzaField::ALL) {
            match field {
                PizzaField::Id => repr.id = Some(self.id),
                PizzaField::Name => repr.name = Some(self.name.clone()),
                PizzaField::Ingredients => repr.ingredients = Some(self.ingredients.clone()),
            }
        }
        repr
    }
}

impl models::RestaurantPizza {
    pub fn to_repr(
        &self,
        pizza: &models::Pizza,
        restaurant: &models::Restaurant,
    ) -> RestaurantPizzaRepr {
        RestaurantPizzaRepr {
            id: self.id,
            price: self.price,
            pizza: pizza.to_repr(Some(&PizzaField::ALL)),
            restaurant: restaurant.to_repr(Some(&RestaurantField::ALL)),
            pizza_id: self.pizza_id,
            restaurant_id: self.restaurant_id,
        }
    }
}

pub fn serialize_restaurant_details(
    restaurant: &models::Restaurant,
    restaurant_pizzas: &[(models::RestaurantPizza, models::Pizza)],
) -> RestaurantDetails {
    RestaurantDetails {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
        restaurant_pizzas: restaurant_pizzas
            .iter()
            .map(|(rp, pizza)| rp.to_repr(pizza, restaurant))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn shack() -> models::Restaurant {
        models::Restaurant {
            id: 1,
            name: "Karen's Pizza Shack".to_string(),
            address: "address1".to_string(),
        }
    }

    fn emma() -> models::Pizza {
        models::Pizza {
            id: 2,
            name: "Emma".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    #[test]
    fn test_restaurant_repr_without_allow_list_has_every_field() {
        let value = serde_json::to_value(shack().to_repr(None)).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"})
        );
    }

    #[test]
    fn test_restaurant_repr_keeps_only_requested_fields() {
        let value = serde_json::to_value(
            shack().to_repr(Some(&[RestaurantField::Name, RestaurantField::Id])),
        )
        .unwrap();
        assert_eq!(value, json!({"id": 1, "name": "Karen's Pizza Shack"}));
    }

    #[test]
    fn test_pizza_repr_with_duplicate_fields() {
        let value = serde_json::to_value(
            emma().to_repr(Some(&[PizzaField::Ingredients, PizzaField::Ingredients])),
        )
        .unwrap();
        assert_eq!(value, json!({"ingredients": "Dough, Tomato Sauce, Cheese"}));
    }

    #[test]
    fn test_pizza_repr_with_empty_allow_list() {
        let value = serde_json::to_value(emma().to_repr(Some(&[]))).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_restaurant_pizza_repr_expands_both_ends() {
        let rp = models::RestaurantPizza {
            id: 7,
            price: 12,
            restaurant_id: 1,
            pizza_id: 2,
        };
        let value = serde_json::to_value(rp.to_repr(&emma(), &shack())).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["price"], 12);
        assert_eq!(value["pizza_id"], 2);
        assert_eq!(value["restaurant_id"], 1);
        assert_eq!(
            value["pizza"],
            json!({"id": 2, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"})
        );
        assert_eq!(
            value["restaurant"],
            json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"})
        );
    }

    #[test]
    fn test_serialize_restaurant_details() {
        let restaurant = shack();
        let rp = models::RestaurantPizza {
            id: 3,
            price: 1,
            restaurant_id: 1,
            pizza_id: 2,
        };
        let details = serialize_restaurant_details(&restaurant, &[(rp, emma())]);
        let value = serde_json::to_value(&details).unwrap();

        assert_eq!(value["name"], "Karen's Pizza Shack");
        let restaurant_pizzas = value["restaurant_pizzas"].as_array().unwrap();
        assert_eq!(restaurant_pizzas.len(), 1);
        assert_eq!(restaurant_pizzas[0]["restaurant"]["address"], "address1");
        assert!(matches!(restaurant_pizzas[0]["pizza"], Value::Object(_)));
    }
}
