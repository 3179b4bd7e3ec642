use axum::Json;

use crate::dto::HelloResponse;

pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello World!",
    })
}
