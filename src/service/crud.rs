//! CRUD execution against SQLite.

use crate::error::{AppError, GENERIC_VALIDATION_ERROR};
use crate::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantDetail, RestaurantPizza,
    RestaurantPizzaCreated, RestaurantPizzaEntry, RestaurantPizzaRow,
};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_RESTAURANTS: &str = "SELECT id, name, address FROM restaurants ORDER BY id";
const SELECT_RESTAURANT_BY_ID: &str = "SELECT id, name, address FROM restaurants WHERE id = ?";
const SELECT_PIZZAS: &str = "SELECT id, name, ingredients FROM pizzas ORDER BY id";
const SELECT_PIZZA_BY_ID: &str = "SELECT id, name, ingredients FROM pizzas WHERE id = ?";
const SELECT_ENTRIES_FOR_RESTAURANT: &str = r#"
    SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
           p.name AS pizza_name, p.ingredients AS pizza_ingredients
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    WHERE rp.restaurant_id = ?
    ORDER BY rp.id
"#;
/// Takes the write lock when the transaction starts, so concurrent writers wait on the busy
/// timeout instead of failing on a read-to-write lock upgrade.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

pub struct CrudService;

impl CrudService {
    /// All restaurants without their associations.
    pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        tracing::debug!(sql = SELECT_RESTAURANTS, "query");
        let rows = sqlx::query_as::<_, Restaurant>(SELECT_RESTAURANTS)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// One restaurant with its associations, each carrying its pizza. Returns None when absent.
    pub async fn read_restaurant(pool: &SqlitePool, id: i64) -> Result<Option<RestaurantDetail>, AppError> {
        tracing::debug!(sql = SELECT_RESTAURANT_BY_ID, id, "query");
        let Some(restaurant) = sqlx::query_as::<_, Restaurant>(SELECT_RESTAURANT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        tracing::debug!(sql = SELECT_ENTRIES_FOR_RESTAURANT, id, "query");
        let entries = sqlx::query_as::<_, RestaurantPizzaRow>(SELECT_ENTRIES_FOR_RESTAURANT)
            .bind(id)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(RestaurantPizzaEntry::from)
            .collect();
        Ok(Some(RestaurantDetail::new(restaurant, entries)))
    }

    /// Delete a restaurant and its associations in one transaction.
    /// Nothing changes when the restaurant does not exist.
    pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let mut tx = pool.begin_with(BEGIN_WRITE).await?;
        let associations = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            tx.rollback().await?;
            return Err(AppError::restaurant_not_found());
        }
        tx.commit().await?;
        tracing::info!(id, associations, "restaurant deleted");
        Ok(())
    }

    pub async fn list_pizzas(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        tracing::debug!(sql = SELECT_PIZZAS, "query");
        let rows = sqlx::query_as::<_, Pizza>(SELECT_PIZZAS).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert an association after checking the price and both references, in one transaction.
    /// Any failure rolls back. Unexpected database errors surface as a generic validation error.
    pub async fn create_restaurant_pizza(
        pool: &SqlitePool,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaCreated, AppError> {
        RestaurantPizza::validate_price(new.price)?;
        let mut tx = pool.begin_with(BEGIN_WRITE).await.map_err(write_failure)?;
        match Self::insert_restaurant_pizza(&mut *tx, new).await {
            Ok(created) => {
                tx.commit().await.map_err(write_failure)?;
                tracing::info!(
                    id = created.id,
                    restaurant_id = created.restaurant_id,
                    pizza_id = created.pizza_id,
                    "restaurant pizza created"
                );
                Ok(created)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(error = %rollback, "rollback failed");
                }
                Err(match e {
                    AppError::Db(db) => write_failure(db),
                    other => other,
                })
            }
        }
    }

    async fn insert_restaurant_pizza(
        conn: &mut SqliteConnection,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaCreated, AppError> {
        let pizza = sqlx::query_as::<_, Pizza>(SELECT_PIZZA_BY_ID)
            .bind(new.pizza_id)
            .fetch_optional(&mut *conn)
            .await?;
        let restaurant = sqlx::query_as::<_, Restaurant>(SELECT_RESTAURANT_BY_ID)
            .bind(new.restaurant_id)
            .fetch_optional(&mut *conn)
            .await?;

        let (pizza, restaurant) = match (pizza, restaurant) {
            (Some(p), Some(r)) => (p, r),
            (pizza, restaurant) => {
                let mut errors = Vec::new();
                if pizza.is_none() {
                    errors.push(format!("pizza {} does not exist", new.pizza_id));
                }
                if restaurant.is_none() {
                    errors.push(format!("restaurant {} does not exist", new.restaurant_id));
                }
                return Err(AppError::Validation(errors));
            }
        };

        let id = sqlx::query("INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?)")
            .bind(new.price)
            .bind(new.pizza_id)
            .bind(new.restaurant_id)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();

        Ok(RestaurantPizzaCreated {
            id,
            price: new.price,
            pizza_id: new.pizza_id,
            restaurant_id: new.restaurant_id,
            pizza,
            restaurant,
        })
    }

    /// Not routed; used by the seeder.
    pub async fn insert_restaurant(pool: &SqlitePool, new: &NewRestaurant) -> Result<Restaurant, AppError> {
        let id = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
            .bind(&new.name)
            .bind(&new.address)
            .execute(pool)
            .await?
            .last_insert_rowid();
        Ok(Restaurant {
            id,
            name: new.name.clone(),
            address: new.address.clone(),
        })
    }

    /// Not routed; used by the seeder.
    pub async fn insert_pizza(pool: &SqlitePool, new: &NewPizza) -> Result<Pizza, AppError> {
        let id = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
            .bind(&new.name)
            .bind(&new.ingredients)
            .execute(pool)
            .await?
            .last_insert_rowid();
        Ok(Pizza {
            id,
            name: new.name.clone(),
            ingredients: new.ingredients.clone(),
        })
    }
}

fn write_failure(e: sqlx::Error) -> AppError {
    tracing::warn!(error = %e, "write rejected");
    AppError::validation(GENERIC_VALIDATION_ERROR)
}
