//! Error responses
//!
//! Maps store errors to HTTP status codes.
//!
//! | Error            | Status | Body                                    |
//! |------------------|--------|-----------------------------------------|
//! | `AnimalNotFound` | 404    | empty                                   |
//! | `InvalidAnimal`  | 400    | `The animal is not properly formatted.` |
//! | `MalformedBody`  | 400    | parser message                          |
//! | anything else    | 500    | error message                           |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ZooError;

impl IntoResponse for ZooError {
    fn into_response(self) -> Response {
        if !self.is_client_error() {
            tracing::error!("Request failed: {}", self);
        }

        match self {
            ZooError::AnimalNotFound => StatusCode::NOT_FOUND.into_response(),
            ZooError::InvalidAnimal | ZooError::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response(),
        }
    }
}
