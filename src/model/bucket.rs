use serde::{Deserialize, Serialize, Serializer};

/// Options accepted by bucket creation and update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BucketOptions {
    pub public: bool,
}

impl BucketOptions {
    pub fn public(public: bool) -> Self {
        Self { public }
    }
}

/// Body sent on create and update. The storage service expects `public`
/// as the strings `"true"` / `"false"`.
#[derive(Debug, Serialize)]
pub struct BucketBody<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(serialize_with = "serialize_flag")]
    pub public: bool,
}

impl<'a> BucketBody<'a> {
    pub fn new(id: &'a str, options: BucketOptions) -> Self {
        Self {
            id,
            name: id,
            public: options.public,
        }
    }
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "true" } else { "false" })
}

/// Bucket descriptor as returned by `GET /bucket` and `GET /bucket/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub file_size_limit: Option<u64>,
    #[serde(default)]
    pub allowed_mime_types: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
