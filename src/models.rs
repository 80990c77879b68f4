//! Persistent entities and the response projections built from them.

use crate::error::AppError;
use serde::Serialize;
use sqlx::FromRow;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    /// Free-form, comma separated.
    pub ingredients: String,
}

/// A restaurant selling a pizza at a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl RestaurantPizza {
    pub const MIN_PRICE: i64 = 1;
    pub const MAX_PRICE: i64 = 30;
    pub const PRICE_RANGE: RangeInclusive<i64> = Self::MIN_PRICE..=Self::MAX_PRICE;

    pub fn validate_price(price: i64) -> Result<i64, AppError> {
        if Self::PRICE_RANGE.contains(&price) {
            Ok(price)
        } else {
            Err(AppError::validation(format!(
                "price must be between {} and {}",
                Self::MIN_PRICE,
                Self::MAX_PRICE
            )))
        }
    }
}

/// Association row joined with its pizza, as read from the store.
#[derive(Debug, Clone, FromRow)]
pub struct RestaurantPizzaRow {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

/// Association nested under a restaurant: carries its pizza, never the restaurant again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaEntry {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
}

impl From<RestaurantPizzaRow> for RestaurantPizzaEntry {
    fn from(row: RestaurantPizzaRow) -> Self {
        RestaurantPizzaEntry {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, restaurant_pizzas: Vec<RestaurantPizzaEntry>) -> Self {
        RestaurantDetail {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas,
        }
    }
}

/// Body returned after creating an association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaCreated {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// Validated input for a new association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}
