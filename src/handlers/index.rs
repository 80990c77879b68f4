use crate::response::html;
use axum::response::Html;

pub const BANNER: &str = "<h1>Code challenge</h1>";

pub async fn index() -> Html<&'static str> {
    html(BANNER)
}
