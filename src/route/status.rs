use axum::response::IntoResponse;
use tracing::info;

pub const STATUS_UP: &str = "UP";

pub async fn status() -> impl IntoResponse {
    info!("Status check executed");
    STATUS_UP
}
