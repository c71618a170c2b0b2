use axum::Json;

pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the careline API service!" }))
}
