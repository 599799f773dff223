use serde::{de::DeserializeOwned, Serialize, Serializer};
use serde_json::Value;

use crate::model::error::StorageError;

/// The `{data, error}` envelope returned by every bucket operation.
///
/// Exactly one side is present. Serializes as `{"data": .., "error": ..}`
/// with the absent side as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct StorageResponse<T = Value> {
    inner: Result<T, StorageError>,
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    data: Option<&'a T>,
    error: Option<&'a StorageError>,
}

impl<T: Serialize> Serialize for StorageResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope {
            data: self.data(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

impl<T> StorageResponse<T> {
    pub fn from_data(data: T) -> Self {
        Self { inner: Ok(data) }
    }

    pub fn from_error(error: StorageError) -> Self {
        Self { inner: Err(error) }
    }

    pub fn data(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    pub fn error(&self) -> Option<&StorageError> {
        self.inner.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    pub fn into_result(self) -> Result<T, StorageError> {
        self.inner
    }
}

impl StorageResponse<Value> {
    /// Decodes the passed-through body into `U`, e.g. [`Bucket`] or
    /// `Vec<Bucket>`. Service errors are carried over untouched.
    ///
    /// [`Bucket`]: crate::model::bucket::Bucket
    pub fn decode<U: DeserializeOwned>(self) -> Result<StorageResponse<U>, serde_json::Error> {
        match self.into_result() {
            Ok(data) => Ok(StorageResponse::from_data(serde_json::from_value(data)?)),
            Err(err) => Ok(StorageResponse::from_error(err)),
        }
    }
}
