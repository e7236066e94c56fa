//! Request body extraction
//!
//! `POST /api/animals` accepts both JSON and URL-encoded forms. Either is
//! turned into an untyped draft; shape checks happen later in the store.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde_json::{Map, Value};

use crate::error::ZooError;
use crate::model::AnimalDraft;

/// The draft carried by a create request
#[derive(Debug)]
pub struct AnimalBody(pub AnimalDraft);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S> FromRequest<S> for AnimalBody
where
    S: Send + Sync,
{
    type Rejection = ZooError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|e| ZooError::MalformedBody(e.body_text()))?;
                value
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| ZooError::MalformedBody(e.body_text()))?;
                form_to_value(pairs)
            }
            // No body parser applies; the draft is empty and fails validation
            BodyKind::Other => Value::Object(Map::new()),
        };

        Ok(AnimalBody(AnimalDraft::from_value(value)))
    }
}

/// Fold form pairs into a JSON object
///
/// `key[]=a` always yields an array, a repeated key collects into an array,
/// and a single plain key stays a string.
pub(crate) fn form_to_value(pairs: Vec<(String, String)>) -> Value {
    let mut object = Map::new();

    for (key, value) in pairs {
        let (key, bracketed) = match key.strip_suffix("[]") {
            Some(base) => (base.to_string(), true),
            None => (key, false),
        };
        let value = Value::String(value);

        match object.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if bracketed => {
                object.insert(key, Value::Array(vec![value]));
            }
            None => {
                object.insert(key, value);
            }
        }
    }

    Value::Object(object)
}
