//! HTTP handlers for restaurants, pizzas, and restaurant pizzas.

pub mod index;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
