use futures::future::BoxFuture;
use serde_json::Value;

use crate::model::{
    error::{RequestError, StorageError},
    request::HttpRequest,
};

pub mod http;
pub mod mock;

/// Result of a single round trip to the storage service.
#[derive(Debug)]
pub enum Outcome {
    /// 2xx response, body decoded as JSON
    Success(Value),
    /// The service answered with a recognizable error payload
    Service(StorageError),
    /// Anything else: transport failure, unreadable or unexpected response
    Failure(RequestError),
}

pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Outcome>;
}
