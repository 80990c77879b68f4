//! Clears the tables and loads sample restaurants, pizzas, and prices.

use pizza_restaurants::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use pizza_restaurants::{clear_tables, connect, ensure_tables, Config, CrudService};
use tracing_subscriber::EnvFilter;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const PRICES: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pizza_restaurants=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;
    clear_tables(&pool).await?;

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let new = NewRestaurant {
            name: name.to_string(),
            address: address.to_string(),
        };
        restaurants.push(CrudService::insert_restaurant(&pool, &new).await?);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let new = NewPizza {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        };
        pizzas.push(CrudService::insert_pizza(&pool, &new).await?);
    }

    for &(r, p, price) in PRICES {
        let new = NewRestaurantPizza {
            price,
            pizza_id: pizzas[p].id,
            restaurant_id: restaurants[r].id,
        };
        CrudService::create_restaurant_pizza(&pool, new).await?;
    }

    tracing::info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        restaurant_pizzas = PRICES.len(),
        database = %config.database_url,
        "seeded"
    );
    Ok(())
}
