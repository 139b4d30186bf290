use std::collections::HashMap;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{errors::DecodeFailure, json};

/// Event handed to the function by the platform. Everything besides `body`
/// is platform metadata the function ignores.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct InvocationRecord(Map<String, Value>);

impl InvocationRecord {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeFailure> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn with_body(body: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("body".to_string(), Value::String(body.into()));
        Self(fields)
    }

    pub fn body(&self) -> Result<&str, DecodeFailure> {
        match self.0.get("body") {
            None => Err(DecodeFailure::MissingBody),
            Some(Value::String(body)) => Ok(body),
            Some(other) => Err(DecodeFailure::WrongType(kind_of(other))),
        }
    }

    pub fn metadata(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(key, _)| key.as_str() != "body")
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    pub body: String,
}

impl ResponseRecord {
    pub fn json<T: Serialize>(
        status: StatusCode,
        headers: Option<HashMap<String, String>>,
        payload: &T,
    ) -> Self {
        match json::to_string(payload) {
            Ok(body) => Self {
                status_code: status.as_u16(),
                headers,
                body,
            },
            Err(e) => {
                error!("Failed to serialize response body: {e}");
                Self {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    headers: None,
                    body: r#"{"error": "failed to serialize response"}"#.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ResponseRecord {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or_else(|_| {
            warn!("Function returned invalid status code {}", self.status_code);
            StatusCode::INTERNAL_SERVER_ERROR
        });
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        for (name, value) in self.headers.iter().flatten() {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!("Skipping invalid response header '{name}'"),
            }
        }
        response
    }
}
