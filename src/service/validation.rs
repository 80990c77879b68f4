//! Request validation from per-field rules.

use crate::error::AppError;
use crate::models::{NewRestaurantPizza, RestaurantPizza};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub integer: bool,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl ValidationRule {
    pub const REQUIRED_INTEGER: ValidationRule = ValidationRule {
        required: true,
        integer: true,
        minimum: None,
        maximum: None,
    };

    pub const fn between(self, minimum: i64, maximum: i64) -> ValidationRule {
        ValidationRule {
            minimum: Some(minimum),
            maximum: Some(maximum),
            ..self
        }
    }
}

/// Rules for `POST /restaurant_pizzas`, in the order errors are reported.
pub const RESTAURANT_PIZZA_RULES: &[(&str, ValidationRule)] = &[
    (
        "price",
        ValidationRule::REQUIRED_INTEGER.between(RestaurantPizza::MIN_PRICE, RestaurantPizza::MAX_PRICE),
    ),
    ("pizza_id", ValidationRule::REQUIRED_INTEGER),
    ("restaurant_id", ValidationRule::REQUIRED_INTEGER),
];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against per-field rules. Every missing required field is reported;
    /// type and bound errors are only checked once all required fields are present.
    pub fn validate(body: &Map<String, Value>, rules: &[(&str, ValidationRule)]) -> Result<(), AppError> {
        let missing: Vec<String> = rules
            .iter()
            .filter(|(field, rule)| rule.required && is_absent(body.get(*field)))
            .map(|(field, _)| format!("Missing required key '{}'", field))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(missing));
        }

        let invalid: Vec<String> = rules
            .iter()
            .filter_map(|(field, rule)| match body.get(*field) {
                None | Some(Value::Null) => None,
                Some(v) => validate_field(field, v, rule).err(),
            })
            .collect();
        if !invalid.is_empty() {
            return Err(AppError::Validation(invalid));
        }
        Ok(())
    }

    /// Validate a restaurant pizza body into its typed form.
    pub fn restaurant_pizza(body: &Map<String, Value>) -> Result<NewRestaurantPizza, AppError> {
        Self::validate(body, RESTAURANT_PIZZA_RULES)?;
        let int = |field: &str| body.get(field).and_then(as_integer).unwrap_or_default();
        Ok(NewRestaurantPizza {
            price: int("price"),
            pizza_id: int("pizza_id"),
            restaurant_id: int("restaurant_id"),
        })
    }
}

fn validate_field(field: &str, v: &Value, rule: &ValidationRule) -> Result<(), String> {
    if rule.integer && as_integer(v).is_none() {
        return Err(format!("{} must be an integer", field));
    }
    let Some(n) = as_integer(v) else {
        return Ok(());
    };
    match (rule.minimum, rule.maximum) {
        (Some(min), Some(max)) if n < min || n > max => {
            Err(format!("{} must be between {} and {}", field, min, max))
        }
        (Some(min), None) if n < min => Err(format!("{} must be at least {}", field, min)),
        (None, Some(max)) if n > max => Err(format!("{} must be at most {}", field, max)),
        _ => Ok(()),
    }
}

/// Integers, and floats with no fractional part (`10.0`), read as `i64`.
fn as_integer(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    let f = v.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn is_absent(v: Option<&Value>) -> bool {
    matches!(v, None | Some(Value::Null))
}
