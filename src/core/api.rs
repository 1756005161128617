//! Shared HTTP plumbing for the resource handlers.
//!
//! Every failure leaves the server as a status code plus a
//! `{ "error": <message> }` body. Domain errors convert into [`ApiError`] so
//! handlers can use `?` throughout.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::debug;

/// A request body extracted as a top-level JSON object.
pub type JsonObject = Result<Json<Map<String, Value>>, JsonRejection>;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An HTTP-ready error: status plus message.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Resolve a request body into a payload.
///
/// A body that is not declared as JSON, or whose top level is not an object
/// (arrays included), reads as an empty payload so field validation reports
/// what is missing. Syntactically broken JSON is rejected outright.
pub fn json_body<T: DeserializeOwned + Default>(body: JsonObject) -> Result<T, ApiError> {
    match body {
        Ok(Json(object)) => serde_json::from_value(Value::Object(object))
            .map_err(|e| ApiError::bad_request(e.to_string())),
        Err(JsonRejection::MissingJsonContentType(_)) | Err(JsonRejection::JsonDataError(_)) => {
            debug!("Request body is not a JSON object, using empty payload");
            Ok(T::default())
        }
        Err(rejection) => Err(ApiError::new(rejection.status(), rejection.body_text())),
    }
}

/// Parse an `{id}` path segment. Anything that is not a base-10 integer
/// cannot name a record.
pub fn parse_id<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// Catch-all responder for unmatched routes and methods.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Named {
        name: Option<String>,
    }

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => Ok(Json(map)),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_json_body_reads_object_fields() {
        let named: Named = json_body(object(json!({ "name": "Ana", "extra": 1 }))).unwrap();
        assert_eq!(named.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id::<i64>("42"), Some(42));
        assert_eq!(parse_id::<i64>("abc"), None);
        assert_eq!(parse_id::<i32>("99999999999"), None);
    }

    #[tokio::test]
    async fn test_route_not_found_shape() {
        let err = route_not_found().await;
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Route not found");
    }
}
