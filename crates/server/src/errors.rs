use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::customer::CustomerError;
use tracing::error;

/// JSON error body: `{"error": title, "detail": message, "code": n}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail, code: None }
    }
}

impl From<CustomerError> for JsonApiError {
    fn from(e: CustomerError) -> Self {
        let (status, title) = match &e {
            CustomerError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            CustomerError::Conflict => (StatusCode::CONFLICT, "Conflict"),
            CustomerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            CustomerError::Hashing(_) | CustomerError::Repository(_) => {
                error!(err = %e, code = e.code(), "customer request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error")
            }
        };
        Self { status, title, detail: Some(e.to_string()), code: Some(e.code()) }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // body parsed but does not fit the request type, or is not JSON at all
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
            }
            other => JsonApiError::new(other.status(), "Bad Request", Some(other.body_text())),
        }
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.title, detail: self.detail.as_deref(), code: self.code };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_business_errors_to_status() {
        assert_eq!(JsonApiError::from(CustomerError::NotFound(1)).status, StatusCode::NOT_FOUND);
        assert_eq!(JsonApiError::from(CustomerError::Conflict).status, StatusCode::CONFLICT);
        assert_eq!(JsonApiError::from(CustomerError::no_changes()).status, StatusCode::BAD_REQUEST);
        assert_eq!(
            JsonApiError::from(CustomerError::Repository("down".into())).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn keeps_message_and_code() {
        let e = JsonApiError::from(CustomerError::NotFound(7));
        assert_eq!(e.detail.as_deref(), Some("Customer with id [7] not found"));
        assert_eq!(e.code, Some(2003));
    }

    #[test]
    fn new_has_no_code() {
        let e = JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some("bad id".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.title, "Validation Error");
        assert_eq!(e.code, None);
    }
}
