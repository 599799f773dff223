//! Client for the bucket endpoints of an object storage HTTP API.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use storage_bucket::{BucketClient, BucketOptions, ClientConfig};
//!
//! let config = ClientConfig::new(
//!     "https://project.example.co/storage/v1",
//!     [("apikey", "secret"), ("Authorization", "Bearer secret")],
//! )?;
//! let client = BucketClient::new(config);
//!
//! let res = client.create_bucket("avatars", Some(BucketOptions::public(true))).await?;
//! if let Some(err) = res.error() {
//!     eprintln!("storage refused: {}", err.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod bucket;
pub mod config;
pub mod model;
pub mod util;

pub use adapters::{Outcome, Transport};
pub use bucket::BucketClient;
pub use config::ClientConfig;
pub use model::{
    bucket::{Bucket, BucketOptions},
    error::{ConfigError, RequestError, StorageError},
    response::StorageResponse,
};
