//! Service abstraction over the remote resource API.

use crate::error::{ClientError, ClientResult};
use catsync_actions::UpdateAction;
use catsync_model::ProductData;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A versioned remote representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRevision {
    /// Resource identifier.
    pub id: String,
    /// Remote version, incremented by every applied update.
    pub version: u64,
    /// The representation itself.
    pub data: ProductData,
}

impl ProductRevision {
    /// Creates a revision.
    pub fn new(id: impl Into<String>, version: u64, data: ProductData) -> Self {
        Self {
            id: id.into(),
            version,
            data,
        }
    }
}

/// A product service handles the remote API calls around one sync.
///
/// This trait abstracts the HTTP layer, allowing for different
/// implementations (REST client, mock for testing). The server applies
/// actions in the given array order and returns the new representation.
pub trait ProductService: Send + Sync {
    /// Fetches the current representation, `Ok(None)` when the resource
    /// does not exist (HTTP 404).
    fn fetch_by_id(&self, id: &str) -> ClientResult<Option<ProductRevision>>;

    /// Applies an action list against the given version.
    fn update(
        &self,
        id: &str,
        version: u64,
        actions: &[UpdateAction],
    ) -> ClientResult<ProductRevision>;
}

/// One recorded `update` call on a [`MockService`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUpdate {
    /// Resource identifier the update targeted.
    pub id: String,
    /// Version the update was made against.
    pub version: u64,
    /// The submitted action list.
    pub actions: Vec<UpdateAction>,
}

/// A scripted mock service for testing.
///
/// Fetch and update results are queues consumed call by call; every update
/// call is recorded with its full payload.
#[derive(Debug, Default)]
pub struct MockService {
    fetch_results: Mutex<VecDeque<ClientResult<Option<ProductRevision>>>>,
    update_results: Mutex<VecDeque<ClientResult<ProductRevision>>>,
    recorded_updates: Mutex<Vec<RecordedUpdate>>,
}

impl MockService {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a fetch result.
    pub fn push_fetch(&self, result: ClientResult<Option<ProductRevision>>) {
        self.fetch_results.lock().unwrap().push_back(result);
    }

    /// Queues an update result.
    pub fn push_update(&self, result: ClientResult<ProductRevision>) {
        self.update_results.lock().unwrap().push_back(result);
    }

    /// Returns the recorded update calls.
    pub fn recorded_updates(&self) -> Vec<RecordedUpdate> {
        self.recorded_updates.lock().unwrap().clone()
    }
}

impl ProductService for MockService {
    fn fetch_by_id(&self, _id: &str) -> ClientResult<Option<ProductRevision>> {
        self.fetch_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport_fatal("no scripted fetch result")))
    }

    fn update(
        &self,
        id: &str,
        version: u64,
        actions: &[UpdateAction],
    ) -> ClientResult<ProductRevision> {
        self.recorded_updates.lock().unwrap().push(RecordedUpdate {
            id: id.to_string(),
            version,
            actions: actions.to_vec(),
        });
        self.update_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport_fatal("no scripted update result")))
    }
}
