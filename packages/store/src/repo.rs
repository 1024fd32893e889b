//! # Remote seam for the user collection
//!
//! [`UserStore`] is the async interface the controller talks to. It mirrors
//! the backend's REST resource one call per method:
//!
//! | Method | Request | Result |
//! |--------|---------|--------|
//! | [`list`](UserStore::list) | `GET {base}` | every stored record |
//! | [`create`](UserStore::create) | `POST {base}` | the stored record with its new id |
//! | [`update`](UserStore::update) | `PUT {base}/{id}` | the stored record after the update |
//! | [`delete`](UserStore::delete) | `DELETE {base}/{id}` | nothing |
//!
//! Each call is a single attempt: no retry, no timeout, no caching. Callers
//! decide how to react to a [`FetchError`].
//!
//! Implementations: `api::HttpUserStore` (reqwest, used by the app) and
//! [`crate::MemoryUserStore`] (tests and offline demos). The futures are not
//! required to be `Send`, so the HTTP implementation can run on the browser's
//! single-threaded executor.

use std::future::Future;

use crate::error::FetchError;
use crate::models::{User, UserId};

/// Async access to the remote user collection.
pub trait UserStore {
    fn list(&self) -> impl Future<Output = Result<Vec<User>, FetchError>>;

    fn create(&self, user: &User) -> impl Future<Output = Result<User, FetchError>>;

    fn update(&self, id: UserId, user: &User) -> impl Future<Output = Result<User, FetchError>>;

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), FetchError>>;
}
