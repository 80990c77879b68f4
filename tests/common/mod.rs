#![allow(dead_code)]

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pizza_restaurants::models::{NewPizza, NewRestaurant, Pizza, Restaurant};
use pizza_restaurants::{app, ensure_tables, AppState, CrudService};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Router over a private in-memory database. One connection keeps the database alive.
pub struct TestApp {
    pub pool: SqlitePool,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.bytes)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        ensure_tables(&pool).await?;
        let router = app(AppState::new(pool.clone()), 64 * 1024);
        Ok(Self { pool, router })
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> Result<TestResponse> {
        let mut req = Request::builder().method(method).uri(uri);
        if body.is_some() {
            req = req.header(header::CONTENT_TYPE, "application/json");
        }
        let req = req.body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))?;
        let res = self.router.clone().oneshot(req).await?;
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?.to_vec();
        Ok(TestResponse { status, bytes })
    }

    pub async fn get(&self, uri: &str) -> Result<TestResponse> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> Result<TestResponse> {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Result<TestResponse> {
        self.send(Method::POST, uri, Some(&body.to_string())).await
    }

    pub async fn restaurant(&self, name: &str, address: &str) -> Result<Restaurant> {
        let new = NewRestaurant {
            name: name.into(),
            address: address.into(),
        };
        Ok(CrudService::insert_restaurant(&self.pool, &new).await?)
    }

    pub async fn pizza(&self, name: &str, ingredients: &str) -> Result<Pizza> {
        let new = NewPizza {
            name: name.into(),
            ingredients: ingredients.into(),
        };
        Ok(CrudService::insert_pizza(&self.pool, &new).await?)
    }

    pub async fn count(&self, table: &str) -> Result<i64> {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
