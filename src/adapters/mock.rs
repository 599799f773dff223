use std::{collections::VecDeque, future, sync::Mutex};

use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::{adapters, model::request::HttpRequest};

/// In-memory transport that records every request and replays scripted
/// outcomes in order. Once the script runs out it answers `{}`.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<adapters::Outcome>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, outcome: adapters::Outcome) -> &Self {
        self.outcomes
            .lock()
            .expect("failed to acquire `outcomes` guard")
            .push_back(outcome);
        self
    }

    pub fn respond(&self, data: Value) -> &Self {
        self.push(adapters::Outcome::Success(data))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("failed to acquire `requests` guard")
            .clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .expect("failed to acquire `requests` guard")
            .last()
            .cloned()
    }
}

impl adapters::Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, adapters::Outcome> {
        self.requests
            .lock()
            .expect("failed to acquire `requests` guard")
            .push(request);

        let outcome = self
            .outcomes
            .lock()
            .expect("failed to acquire `outcomes` guard")
            .pop_front()
            .unwrap_or_else(|| adapters::Outcome::Success(json!({})));

        Box::pin(future::ready(outcome))
    }
}
