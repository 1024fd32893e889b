//! Platform-neutral core of the user manager: the user model, the form
//! schema and its validation, the remote [`UserStore`] seam, and the
//! controller state the UI renders.

pub mod directory;
pub mod error;
pub mod form;
pub mod models;
pub mod repo;
pub mod schema;
pub mod validation;

mod memory;
pub use memory::MemoryUserStore;

pub use directory::{
    delete_user, expire_banner, load_users, refresh_users, submit_user, Banner, BannerKind,
    DirectoryCell, EditSession, SaveAction, UserDirectory, BANNER_DURATION,
};
pub use error::{FetchError, Operation};
pub use form::FormState;
pub use models::{User, UserId};
pub use repo::UserStore;
pub use schema::{FieldName, FieldSpec, USER_FORM_SCHEMA};
