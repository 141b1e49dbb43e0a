//! Response helpers for the handler layer.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// 201 Created with the created entity as the body
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// 200 OK with the updated entity plus a confirmation message,
/// serialized flat: `{...entity, "message": "..."}`
#[derive(Debug, Serialize)]
pub struct Updated<T: Serialize> {
    #[serde(flatten)]
    data: T,
    message: String,
}

impl<T: Serialize> Updated<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for Updated<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

/// 204 No Content with an empty body
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        name: &'static str,
    }

    #[test]
    fn updated_flattens_entity_and_message() {
        let body = Updated::new(Payload { name: "x" }, "Client updated successfully");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "x");
        assert_eq!(json["message"], "Client updated successfully");
    }
}
