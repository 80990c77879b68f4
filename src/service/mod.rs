//! CrudService: restaurant, pizza, and restaurant pizza queries.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::{RequestValidator, ValidationRule, RESTAURANT_PIZZA_RULES};
