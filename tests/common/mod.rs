use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use storage_bucket::{BucketClient, ClientConfig};

const TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

type Reply = (StatusCode, Json<Value>);

struct FakeBucket {
    public: bool,
    objects: usize,
}

/// In-process stand-in for the bucket endpoints of the storage API.
#[derive(Clone)]
pub struct FakeStorage {
    buckets: Arc<Mutex<BTreeMap<String, FakeBucket>>>,
}

impl FakeStorage {
    /// Seeded with `test` (one object) and `photos` (three objects).
    pub fn seeded() -> Self {
        let mut buckets = BTreeMap::new();
        buckets.insert(
            "test".to_string(),
            FakeBucket {
                public: false,
                objects: 1,
            },
        );
        buckets.insert(
            "photos".to_string(),
            FakeBucket {
                public: true,
                objects: 3,
            },
        );

        Self {
            buckets: Arc::new(Mutex::new(buckets)),
        }
    }

    pub fn put_object(&self, bucket: &str) {
        if let Some(b) = self.buckets.lock().unwrap().get_mut(bucket) {
            b.objects += 1;
        }
    }

    pub fn router(self) -> Router {
        let routes = Router::new()
            .route("/bucket", get(list_buckets).post(create_bucket))
            .route(
                "/bucket/{id}",
                get(get_bucket).put(update_bucket).delete(delete_bucket),
            )
            .route("/bucket/{id}/empty", post(empty_bucket))
            .with_state(self);

        Router::new().nest("/storage/v1", routes)
    }
}

fn descriptor(id: &str, bucket: &FakeBucket) -> Value {
    json!({
        "id": id,
        "name": id,
        "owner": "",
        "public": bucket.public,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
    })
}

fn storage_error(status: StatusCode, error: &str, message: &str) -> Reply {
    (
        status,
        Json(json!({
            "statusCode": status.as_u16().to_string(),
            "error": error,
            "message": message,
        })),
    )
}

fn not_found() -> Reply {
    storage_error(StatusCode::NOT_FOUND, "not_found", "Bucket not found")
}

/// The service only accepts `public` as the strings "true" / "false".
fn parse_body(body: &Value) -> Result<(String, bool), Reply> {
    let invalid = || storage_error(StatusCode::BAD_REQUEST, "InvalidRequest", "invalid body");

    let id = body["id"].as_str().ok_or_else(invalid)?;
    if body["name"].as_str() != Some(id) {
        return Err(invalid());
    }

    let public = match body["public"].as_str() {
        Some("true") => true,
        Some("false") => false,
        _ => return Err(invalid()),
    };

    Ok((id.to_string(), public))
}

async fn list_buckets(State(state): State<FakeStorage>) -> Reply {
    let buckets = state.buckets.lock().unwrap();
    let list = buckets
        .iter()
        .map(|(id, b)| descriptor(id, b))
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(Value::Array(list)))
}

async fn create_bucket(State(state): State<FakeStorage>, Json(body): Json<Value>) -> Reply {
    let (id, public) = match parse_body(&body) {
        Err(reply) => return reply,
        Ok(parsed) => parsed,
    };

    let mut buckets = state.buckets.lock().unwrap();
    if buckets.contains_key(&id) {
        return storage_error(
            StatusCode::CONFLICT,
            "Duplicate",
            "The resource already exists",
        );
    }

    let bucket = FakeBucket { public, objects: 0 };
    let reply = descriptor(&id, &bucket);
    buckets.insert(id, bucket);

    (StatusCode::OK, Json(reply))
}

async fn get_bucket(State(state): State<FakeStorage>, Path(id): Path<String>) -> Reply {
    let buckets = state.buckets.lock().unwrap();
    match buckets.get(&id) {
        None => not_found(),
        Some(bucket) => (StatusCode::OK, Json(descriptor(&id, bucket))),
    }
}

async fn update_bucket(
    State(state): State<FakeStorage>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let (_, public) = match parse_body(&body) {
        Err(reply) => return reply,
        Ok(parsed) => parsed,
    };

    let mut buckets = state.buckets.lock().unwrap();
    match buckets.get_mut(&id) {
        None => not_found(),
        Some(bucket) => {
            bucket.public = public;
            (StatusCode::OK, Json(descriptor(&id, bucket)))
        }
    }
}

async fn delete_bucket(State(state): State<FakeStorage>, Path(id): Path<String>) -> Reply {
    let mut buckets = state.buckets.lock().unwrap();
    match buckets.get(&id).map(|bucket| bucket.objects) {
        None => not_found(),
        Some(objects) if objects > 0 => storage_error(
            StatusCode::CONFLICT,
            "InvalidRequest",
            "The bucket you tried to delete is not empty",
        ),
        Some(_) => {
            buckets.remove(&id);
            (
                StatusCode::OK,
                Json(json!({"message": "Successfully deleted"})),
            )
        }
    }
}

async fn empty_bucket(State(state): State<FakeStorage>, Path(id): Path<String>) -> Reply {
    let mut buckets = state.buckets.lock().unwrap();
    match buckets.get_mut(&id) {
        None => not_found(),
        Some(bucket) => {
            bucket.objects = 0;
            (
                StatusCode::OK,
                Json(json!({"message": "Successfully emptied"})),
            )
        }
    }
}

/// Serves `app` on an ephemeral local port and returns the storage base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/storage/v1", addr)
}

pub fn client(url: &str) -> BucketClient {
    let config = ClientConfig::new(url, [("apikey", "test-key")]).unwrap();
    BucketClient::new(config)
}

/// Base URL that nothing listens on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}/storage/v1", addr)
}
