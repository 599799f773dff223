use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Method,
};
use tracing::{info, info_span, warn, Instrument};

use crate::{
    adapters,
    config::ClientConfig,
    model::{
        bucket::{BucketBody, BucketOptions},
        error::RequestError,
        request::HttpRequest,
        response::StorageResponse,
    },
};

/// Client for the bucket endpoints of the storage API.
///
/// Every operation issues exactly one request. Errors reported by the
/// service come back inside the [`StorageResponse`]; any other failure is
/// returned as `Err` and never enveloped.
pub struct BucketClient<T = reqwest::Client> {
    config: ClientConfig,
    transport: T,
}

impl BucketClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, reqwest::Client::new())
    }
}

impl<T: adapters::Transport> BucketClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates a new bucket. `options` defaults to a private bucket.
    pub async fn create_bucket(
        &self,
        bucket_id: &str,
        options: Option<BucketOptions>,
    ) -> Result<StorageResponse, RequestError> {
        let url = format!("{}/bucket", self.config.url);
        let req = self.json_request(Method::POST, url, bucket_id, options)?;

        self.execute(req)
            .instrument(info_span!("create_bucket", bucket = bucket_id))
            .await
    }

    /// Retrieves the details of an existing bucket.
    pub async fn get_bucket(&self, bucket_id: &str) -> Result<StorageResponse, RequestError> {
        let url = format!("{}/bucket/{}", self.config.url, bucket_id);
        let req = HttpRequest::new(Method::GET, url, self.config.headers.clone());

        self.execute(req)
            .instrument(info_span!("get_bucket", bucket = bucket_id))
            .await
    }

    /// Retrieves the details of all buckets in the project.
    pub async fn list_buckets(&self) -> Result<StorageResponse, RequestError> {
        let url = format!("{}/bucket", self.config.url);
        let req = HttpRequest::new(Method::GET, url, self.config.headers.clone());

        self.execute(req).instrument(info_span!("list_buckets")).await
    }

    /// Updates a bucket. `options` defaults to a private bucket.
    pub async fn update_bucket(
        &self,
        bucket_id: &str,
        options: Option<BucketOptions>,
    ) -> Result<StorageResponse, RequestError> {
        let url = format!("{}/bucket/{}", self.config.url, bucket_id);
        let req = self.json_request(Method::PUT, url, bucket_id, options)?;

        self.execute(req)
            .instrument(info_span!("update_bucket", bucket = bucket_id))
            .await
    }

    /// Deletes a bucket. The service refuses to delete a bucket that still
    /// holds objects; call [`BucketClient::empty_bucket`] first.
    pub async fn delete_bucket(&self, bucket_id: &str) -> Result<StorageResponse, RequestError> {
        let url = format!("{}/bucket/{}", self.config.url, bucket_id);
        let req = HttpRequest::new(Method::DELETE, url, self.config.headers.clone());

        self.execute(req)
            .instrument(info_span!("delete_bucket", bucket = bucket_id))
            .await
    }

    /// Removes all objects inside a bucket.
    pub async fn empty_bucket(&self, bucket_id: &str) -> Result<StorageResponse, RequestError> {
        let url = format!("{}/bucket/{}/empty", self.config.url, bucket_id);
        let req = HttpRequest::new(Method::POST, url, self.config.headers.clone());

        self.execute(req)
            .instrument(info_span!("empty_bucket", bucket = bucket_id))
            .await
    }

    fn json_request(
        &self,
        method: Method,
        url: String,
        bucket_id: &str,
        options: Option<BucketOptions>,
    ) -> Result<HttpRequest, RequestError> {
        let body = serde_json::to_value(BucketBody::new(
            bucket_id,
            options.unwrap_or_default(),
        ))?;

        let mut headers = self.config.headers.clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(HttpRequest::new(method, url, headers).with_body(body))
    }

    async fn execute(&self, req: HttpRequest) -> Result<StorageResponse, RequestError> {
        info!(method=%req.method, url=%req.url, "called");

        match self.transport.send(req).await {
            adapters::Outcome::Success(data) => Ok(StorageResponse::from_data(data)),
            adapters::Outcome::Service(err) => {
                warn!(error_message=%err, error_group="storage", "service error");
                Ok(StorageResponse::from_error(err))
            }
            adapters::Outcome::Failure(err) => Err(err),
        }
    }
}
