mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn list_empty() -> Result<()> {
    let app = common::TestApp::new().await?;
    let res = app.get("/pizzas").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()?, json!([]));
    Ok(())
}

#[tokio::test]
async fn list_projects_id_name_ingredients() -> Result<()> {
    let app = common::TestApp::new().await?;
    let emma = app.pizza("Emma", "Dough, Tomato Sauce, Cheese").await?;
    let geri = app.pizza("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await?;

    let first = app.get("/pizzas").await?.json()?;
    assert_eq!(
        first,
        json!([
            { "id": emma.id, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese" },
            { "id": geri.id, "name": "Geri", "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni" },
        ])
    );
    assert_eq!(app.get("/pizzas").await?.json()?, first);
    Ok(())
}

#[tokio::test]
async fn pizzas_are_read_only() -> Result<()> {
    let app = common::TestApp::new().await?;
    let p = app.pizza("Emma", "Dough").await?;
    let res = app.delete(&format!("/pizzas/{}", p.id)).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(app.count("pizzas").await?, 1);
    Ok(())
}
