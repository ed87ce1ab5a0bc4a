//! Fake transports for tests.
//!
//! `MockTransport` replays scripted responses and records every request.
//! `InMemoryEngine` behaves like a tiny service for indexes, documents and
//! updates, so round-trip properties can be checked end to end.

use std::collections::{BTreeMap, VecDeque};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::errors::ClientError;
use crate::interfaces::{HttpRequest, HttpResponse, Method, Transport};

const TIMESTAMP: &str = "2020-01-01T00:00:00Z";

/// Scripted transport: answers requests in order with queued responses.
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ClientError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a JSON response.
    pub(crate) fn respond(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    /// Queue a response with a raw body.
    pub(crate) fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub(crate) fn fail(self, error: ClientError) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .push_back(Err(error));
        self
    }

    pub(crate) async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    pub(crate) async fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted response left")))
    }
}

#[derive(Default)]
struct EngineState {
    indexes: BTreeMap<String, Value>,
    documents: BTreeMap<String, BTreeMap<String, Value>>,
    updates: BTreeMap<String, Vec<Value>>,
    next_update_id: u64,
    next_generated_uid: u64,
}

impl EngineState {
    fn record_update(&mut self, uid: &str, name: &str, number: usize) -> Value {
        let update_id = self.next_update_id;
        self.next_update_id += 1;
        self.updates.entry(uid.to_string()).or_default().push(json!({
            "status": "processed",
            "updateId": update_id,
            "type": { "name": name, "number": number },
            "duration": 0.001,
            "enqueuedAt": TIMESTAMP,
            "processedAt": TIMESTAMP
        }));
        json!({ "updateId": update_id })
    }
}

/// In-memory stand-in for the service.
///
/// Documents are keyed by their `id` field and applied immediately; every
/// mutation is recorded as an already processed update.
#[derive(Default)]
pub(crate) struct InMemoryEngine {
    state: Mutex<EngineState>,
}

fn ok(body: Value) -> HttpResponse {
    HttpResponse::new(200, body.to_string())
}

fn created(body: Value) -> HttpResponse {
    HttpResponse::new(201, body.to_string())
}

fn accepted(body: Value) -> HttpResponse {
    HttpResponse::new(202, body.to_string())
}

fn no_content() -> HttpResponse {
    HttpResponse::new(204, "")
}

fn failure(status: u16, message: &str) -> HttpResponse {
    HttpResponse::new(status, json!({ "message": message }).to_string())
}

fn document_id(document: &Value) -> Option<String> {
    match document.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

impl InMemoryEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn route(state: &mut EngineState, request: &HttpRequest, segments: &[String]) -> HttpResponse {
        let parts: Vec<&str> = segments.iter().map(String::as_str).collect();
        match (request.method, parts.as_slice()) {
            (Method::Get, ["indexes"]) => {
                ok(Value::Array(state.indexes.values().cloned().collect()))
            }
            (Method::Post, ["indexes"]) => Self::create_index(state, request.body.as_ref()),
            (method, ["indexes", uid, rest @ ..]) => {
                let uid = uid.to_string();
                if !state.indexes.contains_key(&uid) {
                    return failure(404, &format!("Index {} not found", uid));
                }
                Self::route_index(state, method, &uid, rest, request.body.as_ref())
            }
            _ => failure(404, "route not found"),
        }
    }

    fn create_index(state: &mut EngineState, body: Option<&Value>) -> HttpResponse {
        let body = body.cloned().unwrap_or_else(|| json!({}));
        let uid = match body.get("uid").and_then(Value::as_str) {
            Some(uid) => uid.to_string(),
            None => {
                state.next_generated_uid += 1;
                format!("gen{:04}", state.next_generated_uid)
            }
        };
        if state.indexes.contains_key(&uid) {
            return failure(409, &format!("Index {} already exists", uid));
        }
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(&uid)
            .to_string();
        let index = json!({
            "uid": uid,
            "name": name,
            "createdAt": TIMESTAMP,
            "updatedAt": TIMESTAMP
        });
        state.indexes.insert(uid.clone(), index.clone());
        state.documents.insert(uid, BTreeMap::new());
        created(index)
    }

    fn route_index(
        state: &mut EngineState,
        method: Method,
        uid: &str,
        rest: &[&str],
        body: Option<&Value>,
    ) -> HttpResponse {
        match (method, rest) {
            (Method::Get, []) => ok(state.indexes[uid].clone()),
            (Method::Put, []) => {
                let name = body
                    .and_then(|b| b.get("name"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                if let Some(index) = state.indexes.get_mut(uid) {
                    index["name"] = json!(name);
                }
                ok(state.indexes[uid].clone())
            }
            (Method::Delete, []) => {
                state.indexes.remove(uid);
                state.documents.remove(uid);
                state.updates.remove(uid);
                no_content()
            }
            (Method::Get, ["documents"]) => {
                let documents: Vec<Value> = state.documents[uid].values().cloned().collect();
                ok(Value::Array(documents))
            }
            (Method::Post, ["documents"]) => {
                let documents = body.and_then(Value::as_array).cloned().unwrap_or_default();
                let mut keyed = Vec::with_capacity(documents.len());
                for document in documents {
                    match document_id(&document) {
                        Some(id) => keyed.push((id, document)),
                        None => return failure(400, "document has no id"),
                    }
                }
                let number = keyed.len();
                if let Some(stored) = state.documents.get_mut(uid) {
                    stored.extend(keyed);
                }
                accepted(state.record_update(uid, "DocumentsAddition", number))
            }
            (Method::Delete, ["documents"]) => {
                if let Some(stored) = state.documents.get_mut(uid) {
                    stored.clear();
                }
                accepted(state.record_update(uid, "ClearAll", 0))
            }
            (Method::Post, ["documents", "delete"]) => {
                let ids: Vec<String> = body
                    .and_then(Value::as_array)
                    .map(|ids| {
                        ids.iter()
                            .filter_map(|id| id.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default();
                if let Some(stored) = state.documents.get_mut(uid) {
                    for id in &ids {
                        stored.remove(id);
                    }
                }
                accepted(state.record_update(uid, "DocumentsDeletion", ids.len()))
            }
            (Method::Get, ["documents", id]) => match state.documents[uid].get(*id) {
                Some(document) => ok(document.clone()),
                None => failure(404, &format!("Document {} not found", id)),
            },
            (Method::Delete, ["documents", id]) => {
                let removed = state
                    .documents
                    .get_mut(uid)
                    .and_then(|stored| stored.remove(*id));
                if removed.is_none() {
                    return failure(404, &format!("Document {} not found", id));
                }
                accepted(state.record_update(uid, "DocumentsDeletion", 1))
            }
            (Method::Get, ["updates"]) => ok(Value::Array(
                state.updates.get(uid).cloned().unwrap_or_default(),
            )),
            (Method::Get, ["updates", id]) => {
                let found = state.updates.get(uid).and_then(|updates| {
                    updates
                        .iter()
                        .find(|u| u["updateId"].to_string() == *id)
                        .cloned()
                });
                match found {
                    Some(update) => ok(update),
                    None => failure(404, &format!("Update {} not found", id)),
                }
            }
            _ => failure(404, "route not found"),
        }
    }
}

#[async_trait]
impl Transport for InMemoryEngine {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let segments = request
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                urlencoding::decode(s)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|e| ClientError::transport(e.to_string()))
            })
            .collect::<Result<Vec<String>, ClientError>>()?;

        let mut state = self.state.lock().await;
        Ok(Self::route(&mut state, &request, &segments))
    }
}
