use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::Backend;
use crate::error::{ApiError, ErrorBody};

/// A request seen by [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct MemoryState {
    collections: HashMap<String, Vec<Value>>,
    counters: HashMap<String, u64>,
    failures: VecDeque<ApiError>,
    empty_writes: bool,
    requests: Vec<RecordedRequest>,
}

/// In-memory [`Backend`] for tests.
///
/// Collections are keyed by path (`/hero`), items are raw JSON. Created items get
/// ids made of the collection's first letter and a counter (`h1`, `h2`, ...).
/// Every call is recorded, including ones that fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of a collection.
    pub fn seed<T: Serialize>(&self, path: &str, items: &[T]) {
        let values = items
            .iter()
            .filter_map(|item| serde_json::to_value(item).ok())
            .collect();
        self.state().collections.insert(path.to_string(), values);
    }

    pub fn with_items<T: Serialize>(self, path: &str, items: &[T]) -> Self {
        self.seed(path, items);
        self
    }

    /// Make the next request fail with `error`. Calls queue up.
    pub fn fail_next(&self, error: ApiError) {
        self.state().failures.push_back(error);
    }

    /// Answer POST/PUT with an empty body instead of the stored entity.
    pub fn set_empty_writes(&self, empty: bool) {
        self.state().empty_writes = empty;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn items(&self, path: &str) -> Vec<Value> {
        self.state()
            .collections
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and pop a scripted failure, if any.
    fn begin(&self, method: &'static str, path: &str, body: Option<Value>) -> Result<(), ApiError> {
        let mut state = self.state();
        state.requests.push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });
        match state.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn respond<T: DeserializeOwned>(&self, value: Value) -> Result<Option<T>, ApiError> {
        if self.state().empty_writes {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn id_text(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `/hero/h1` → (`/hero`, `h1`).
fn split_item_path(path: &str) -> Option<(&str, &str)> {
    path.rsplit_once('/')
        .filter(|(collection, id)| !collection.is_empty() && !id.is_empty())
}

fn not_found() -> ApiError {
    ApiError::http(404, ErrorBody::with_message("Not found"))
}

impl Backend for MemoryBackend {
    async fn get<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.begin("GET", path, None)?;
        let items = self.items(path);
        serde_json::from_value(Value::Array(items)).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut value = encode(body)?;
        self.begin("POST", path, Some(value.clone()))?;
        {
            let mut state = self.state();
            let counter = state.counters.entry(path.to_string()).or_insert(0);
            *counter += 1;
            let prefix = path.trim_start_matches('/').chars().next().unwrap_or('x');
            let id = format!("{prefix}{counter}");
            if let Value::Object(map) = &mut value {
                map.entry("id").or_insert(Value::String(id));
            }
            state
                .collections
                .entry(path.to_string())
                .or_default()
                .push(value.clone());
        }
        self.respond(value)
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut value = encode(body)?;
        self.begin("PUT", path, Some(value.clone()))?;
        let (collection, id) = split_item_path(path).ok_or_else(not_found)?;
        {
            let mut state = self.state();
            let items = state.collections.get_mut(collection).ok_or_else(not_found)?;
            let slot = items
                .iter_mut()
                .find(|item| id_text(item).as_deref() == Some(id))
                .ok_or_else(not_found)?;
            if let (Value::Object(map), Some(stored_id)) = (&mut value, slot.get("id").cloned()) {
                map.insert("id".to_string(), stored_id);
            }
            *slot = value.clone();
        }
        self.respond(value)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.begin("DELETE", path, None)?;
        let (collection, id) = split_item_path(path).ok_or_else(not_found)?;
        let mut state = self.state();
        let items = state.collections.get_mut(collection).ok_or_else(not_found)?;
        let before = items.len();
        items.retain(|item| id_text(item).as_deref() != Some(id));
        if items.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud;
    use crate::models::{EntityId, Hero};
    use serde_json::json;

    fn hero(id: &str, title: &str) -> Hero {
        Hero {
            id: Some(EntityId::from(id)),
            title: title.into(),
            description: "d".into(),
            ..Hero::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_prefixed_ids() {
        let backend = MemoryBackend::new();
        let draft = Hero {
            title: "Launch".into(),
            description: "New launch".into(),
            ..Hero::default()
        };

        let created = crud::create(&backend, &draft).await.unwrap().unwrap();
        assert_eq!(created.id, Some(EntityId::from("h1")));

        let second = crud::create(&backend, &draft).await.unwrap().unwrap();
        assert_eq!(second.id, Some(EntityId::from("h2")));
        assert_eq!(crud::list::<Hero>(&backend).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_id() {
        let backend = MemoryBackend::new().with_items("/hero", &[hero("h1", "Old"), hero("h2", "Keep")]);

        let mut edited = hero("h1", "New");
        edited.image_url = "https://img".into();
        let updated = crud::update(&backend, &EntityId::from("h1"), &edited)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "New");

        crud::delete::<Hero>(&backend, &EntityId::from("h2")).await.unwrap();
        let remaining = crud::list::<Hero>(&backend).await.unwrap();
        assert_eq!(remaining, vec![edited]);

        let missing = crud::delete::<Hero>(&backend, &EntityId::from("h9")).await;
        assert_eq!(missing.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn test_scripted_failure_is_recorded() {
        let backend = MemoryBackend::new();
        backend.fail_next(ApiError::Network("offline".into()));

        let result = crud::list::<Hero>(&backend).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
        assert!(crud::list::<Hero>(&backend).await.unwrap().is_empty());

        let requests = backend.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/hero");
    }

    #[tokio::test]
    async fn test_empty_writes() {
        let backend = MemoryBackend::new();
        backend.set_empty_writes(true);
        let created = crud::create(&backend, &hero("ignored", "T")).await.unwrap();
        assert!(created.is_none());
        assert_eq!(backend.items("/hero")[0]["title"], json!("T"));
    }
}
