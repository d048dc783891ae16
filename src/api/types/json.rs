//! JSON extractor that reports every decoding failure as a bad request

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor.
///
/// Unlike `axum::Json` it ignores the `Content-Type` header and maps syntax,
/// shape and body-read failures alike to `400 Bad Request`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            malformed(format!("Failed to read request body: {}", rejection.body_text()))
        })?;

        serde_json::from_slice(&bytes)
            .map(Json)
            .map_err(|e| malformed(describe_json_error(&e)))
    }
}

fn malformed(message: String) -> ApiError {
    ApiError::bad_request(message).with_code("json_parse_error")
}

fn describe_json_error(err: &serde_json::Error) -> String {
    use serde_json::error::Category;

    match err.classify() {
        Category::Data => format!("Invalid JSON data: {}", err),
        Category::Syntax | Category::Eof => format!("Invalid JSON syntax: {}", err),
        Category::Io => "Invalid request body".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Credentials {
        username: String,
        password: String,
    }

    async fn extract(body: &'static str) -> Result<Json<Credentials>, ApiError> {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();

        Json::<Credentials>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_extracts_without_content_type() {
        let Json(credentials) = extract(r#"{"username":"alice","password":"secret123"}"#)
            .await
            .unwrap();

        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "secret123");
    }

    #[tokio::test]
    async fn test_truncated_body_is_bad_request() {
        let err = extract(r#"{"username":"test""#).await.unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code.as_deref(), Some("json_parse_error"));
        assert!(err.response.error.message.starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_bad_request() {
        let err = extract(r#"{"username":"alice"}"#).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.response.error.message.starts_with("Invalid JSON data"));

        let err = extract(r#"{"username":1,"password":"x"}"#).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_body_is_bad_request() {
        let err = extract("").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_trailing_data_is_bad_request() {
        let err = extract(r#"{"username":"bob","password":"x"} trailing"#)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.response.error.message.starts_with("Invalid JSON syntax"));
    }
}
