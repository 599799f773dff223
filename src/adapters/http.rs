use futures::future::BoxFuture;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    adapters,
    model::{
        error::{RequestError, StorageError},
        request::HttpRequest,
    },
};

/// Error payload of the storage API, e.g.
/// `{"statusCode": "404", "error": "not_found", "message": "Bucket not found"}`.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(rename = "statusCode")]
    status_code: Option<Value>,
    error: Option<String>,
    message: Option<String>,
}

impl adapters::Transport for reqwest::Client {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, adapters::Outcome> {
        Box::pin(async move {
            debug!(method=%request.method, url=%request.url, "sending request");

            let mut req = self
                .request(request.method, &request.url)
                .headers(request.headers);

            if let Some(body) = request.body {
                req = req.body(body.to_string());
            }

            let res = match req.send().await {
                Err(err) => return adapters::Outcome::Failure(err.into()),
                Ok(res) => res,
            };

            let status = res.status();
            let bytes = match res.bytes().await {
                Err(err) => return adapters::Outcome::Failure(err.into()),
                Ok(bytes) => bytes,
            };

            classify(status, &bytes)
        })
    }
}

/// Sorts a response into an [`adapters::Outcome`]. A 2xx response always
/// yields non-null data: an empty or `null` body becomes `{}`.
pub fn classify(status: StatusCode, body: &[u8]) -> adapters::Outcome {
    if status.is_success() {
        if body.iter().all(u8::is_ascii_whitespace) {
            return adapters::Outcome::Success(json!({}));
        }

        return match serde_json::from_slice(body) {
            Err(err) => adapters::Outcome::Failure(RequestError::MalformedBody(err)),
            Ok(Value::Null) => adapters::Outcome::Success(json!({})),
            Ok(value) => adapters::Outcome::Success(value),
        };
    }

    match parse_storage_error(status, body) {
        Some(err) => adapters::Outcome::Service(err),
        None => adapters::Outcome::Failure(RequestError::UnexpectedResponse {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }),
    }
}

fn parse_storage_error(status: StatusCode, body: &[u8]) -> Option<StorageError> {
    let payload = match serde_json::from_slice(body).ok()? {
        obj @ Value::Object(_) => serde_json::from_value::<ErrorPayload>(obj).ok()?,
        _ => return None,
    };

    let status_code = match payload.status_code {
        Some(Value::String(code)) => Some(code),
        Some(Value::Number(code)) => Some(code.to_string()),
        _ => None,
    };

    let message = payload.message.or_else(|| payload.error.clone())?;

    Some(StorageError {
        status: status.as_u16(),
        status_code,
        error: payload.error,
        message,
    })
}
