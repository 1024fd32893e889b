use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{FetchError, Operation};
use crate::models::{User, UserId};
use crate::repo::UserStore;

#[derive(Debug)]
struct MemoryState {
    users: Vec<User>,
    next_id: UserId,
    offline: bool,
    requests: usize,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
            offline: false,
            requests: 0,
        }
    }
}

/// In-memory UserStore for testing and offline demos.
///
/// Behaves like the REST backend: assigns increasing ids on create and
/// answers 404 for unknown ids. Clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Records without an id get one assigned.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        {
            let mut state = store.lock();
            for mut user in users {
                match user.id {
                    Some(id) => state.next_id = state.next_id.max(id + 1),
                    None => {
                        user.id = Some(state.next_id);
                        state.next_id += 1;
                    }
                }
                state.users.push(user);
            }
        }
        store
    }

    /// Simulate an unreachable backend: every call fails while set.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Number of calls made against the store so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests
    }

    /// Current contents, bypassing the request counter.
    pub fn snapshot(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Count the request and fail it if the store is offline.
    fn begin(&self, operation: Operation) -> Result<MutexGuard<'_, MemoryState>, FetchError> {
        let mut state = self.lock();
        state.requests += 1;
        if state.offline {
            return Err(FetchError::Transport {
                operation,
                message: "backend unreachable".to_string(),
            });
        }
        Ok(state)
    }
}

fn not_found(operation: Operation) -> FetchError {
    FetchError::Status {
        operation,
        status: 404,
    }
}

impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, FetchError> {
        let state = self.begin(Operation::List)?;
        Ok(state.users.clone())
    }

    async fn create(&self, user: &User) -> Result<User, FetchError> {
        let mut state = self.begin(Operation::Create)?;
        let stored = user.clone().with_id(state.next_id);
        state.next_id += 1;
        state.users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: UserId, user: &User) -> Result<User, FetchError> {
        let mut state = self.begin(Operation::Update)?;
        let slot = state
            .users
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or_else(|| not_found(Operation::Update))?;
        *slot = user.clone().with_id(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), FetchError> {
        let mut state = self.begin(Operation::Delete)?;
        let before = state.users.len();
        state.users.retain(|u| u.id != Some(id));
        if state.users.len() == before {
            return Err(not_found(Operation::Delete));
        }
        Ok(())
    }
}
