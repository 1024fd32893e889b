//! # Controller state for the user manager
//!
//! [`UserDirectory`] owns everything the screen shows that is not a form
//! keystroke: the loaded collection, the edit session, the loading and
//! modal flags, the form-level error, and the transient banner.
//!
//! ## Sync transitions
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`begin_add`](UserDirectory::begin_add) | Clears the edit session and form error, opens the modal. |
//! | [`begin_edit`](UserDirectory::begin_edit) | Captures the record's id and phone, clears the form error, opens the modal. |
//! | [`close_modal`](UserDirectory::close_modal) | Closes the modal, clears the edit session and form error. |
//! | [`plan_save`](UserDirectory::plan_save) | Decides between create and update and enforces phone uniqueness. |
//! | [`show_banner`](UserDirectory::show_banner) / [`clear_banner`](UserDirectory::clear_banner) | Sequenced transient messages. |
//!
//! ## Async flows
//!
//! [`load_users`], [`submit_user`] and [`delete_user`] talk to a
//! [`UserStore`] and apply their results through a [`DirectoryCell`]. The
//! cell hands out short-lived `&mut UserDirectory` access, so no borrow of
//! the state is ever held across an `.await`. In the UI the cell wraps a
//! signal; in tests the directory is its own cell.
//!
//! [`expire_banner`] is the timer half of a banner: it waits out a delay
//! supplied by the caller and then clears the banner it was started for.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;
use crate::models::{User, UserId};
use crate::repo::UserStore;

pub const DUPLICATE_PHONE_MESSAGE: &str = "Phone number already exists";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save user";
pub const USER_ADDED_MESSAGE: &str = "User added successfully";
pub const USER_UPDATED_MESSAGE: &str = "User updated successfully";
pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete user";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users";

/// How long a banner stays on screen.
pub const BANNER_DURATION: Duration = Duration::from_millis(2500);

/// The record being edited and the phone it had when the edit began.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub id: UserId,
    pub original_phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A transient message. `seq` identifies it for its own expiry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub seq: u64,
    pub kind: BannerKind,
    pub message: String,
}

/// What a validated submit turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveAction {
    Create(User),
    Update(UserId, User),
}

impl SaveAction {
    pub fn success_message(&self) -> &'static str {
        match self {
            SaveAction::Create(_) => USER_ADDED_MESSAGE,
            SaveAction::Update(..) => USER_UPDATED_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
    editing: Option<EditSession>,
    loading: bool,
    modal_open: bool,
    form_error: Option<String>,
    banner: Option<Banner>,
    banner_seq: u64,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// The record that pre-fills the form, if an edit is in progress and the
    /// record is still in the loaded collection.
    pub fn editing_user(&self) -> Option<&User> {
        let session = self.editing.as_ref()?;
        self.users.iter().find(|u| u.id == Some(session.id))
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_form_error(&mut self, message: impl Into<String>) {
        self.form_error = Some(message.into());
    }

    pub fn begin_add(&mut self) {
        self.editing = None;
        self.form_error = None;
        self.modal_open = true;
    }

    /// Start editing `user`. A record the backend has not stored yet has no
    /// id to update, so it opens the form in add mode instead.
    pub fn begin_edit(&mut self, user: &User) {
        self.editing = user.id.map(|id| EditSession {
            id,
            original_phone: user.phone.clone(),
        });
        self.form_error = None;
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.form_error = None;
        self.editing = None;
    }

    /// Whether a record other than the one being edited already uses `phone`.
    pub fn phone_taken(&self, phone: &str) -> bool {
        let editing_id = self.editing.as_ref().map(|s| s.id);
        self.users
            .iter()
            .any(|u| u.phone == phone && (editing_id.is_none() || u.id != editing_id))
    }

    /// Turn a validated submit into a create or update, or refuse it when the
    /// phone belongs to another record.
    ///
    /// An edit that keeps the phone captured at edit start skips the
    /// uniqueness check: that phone exists in the collection under the
    /// edited record's own id.
    pub fn plan_save(&self, user: User) -> Result<SaveAction, &'static str> {
        if let Some(session) = &self.editing {
            if user.phone == session.original_phone {
                return Ok(SaveAction::Update(session.id, user));
            }
        }

        if self.phone_taken(&user.phone) {
            return Err(DUPLICATE_PHONE_MESSAGE);
        }

        Ok(match &self.editing {
            Some(session) => SaveAction::Update(session.id, user),
            None => SaveAction::Create(user),
        })
    }

    /// Record a successful save: the form error and edit session go away,
    /// the modal is left for its owner to close.
    pub fn finish_save(&mut self) {
        self.form_error = None;
        self.editing = None;
    }

    /// Replace the current banner. Returns the new banner's sequence number.
    pub fn show_banner(&mut self, kind: BannerKind, message: impl Into<String>) -> u64 {
        self.banner_seq += 1;
        self.banner = Some(Banner {
            seq: self.banner_seq,
            kind,
            message: message.into(),
        });
        self.banner_seq
    }

    /// Clear the banner if it is still the one numbered `seq`.
    pub fn clear_banner(&mut self, seq: u64) -> bool {
        if self.banner.as_ref().is_some_and(|b| b.seq == seq) {
            self.banner = None;
            return true;
        }
        false
    }
}

/// Short-lived access to a [`UserDirectory`].
///
/// `read` must not count as a change: for a signal-backed cell it peeks
/// instead of writing, so planning a save does not re-render anything.
pub trait DirectoryCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut UserDirectory) -> R) -> R;

    fn read<R>(&self, f: impl FnOnce(&UserDirectory) -> R) -> R;
}

impl DirectoryCell for UserDirectory {
    fn update<R>(&mut self, f: impl FnOnce(&mut UserDirectory) -> R) -> R {
        f(self)
    }

    fn read<R>(&self, f: impl FnOnce(&UserDirectory) -> R) -> R {
        f(self)
    }
}

/// Fetch the full collection and replace the local copy.
///
/// The loading flag is set for the duration of the call and cleared on
/// failure too; a failed load keeps the previous collection.
pub async fn load_users<C, S>(cell: &mut C, store: &S) -> Result<(), FetchError>
where
    C: DirectoryCell,
    S: UserStore,
{
    cell.update(|d| d.set_loading(true));
    let result = store.list().await;
    cell.update(|d| {
        d.set_loading(false);
        if let Ok(users) = &result {
            d.set_users(users.clone());
        }
    });
    let users = result?;
    tracing::debug!("Loaded {} users", users.len());
    Ok(())
}

/// Create or update `user`, then reload the collection and announce it.
///
/// Returns `true` when the record was saved. On refusal or failure the form
/// error explains why and local state is left as it was.
pub async fn submit_user<C, S>(cell: &mut C, store: &S, user: User) -> bool
where
    C: DirectoryCell,
    S: UserStore,
{
    let action = match cell.read(|d| d.plan_save(user)) {
        Ok(action) => action,
        Err(message) => {
            tracing::info!("Refused to save user: {}", message);
            cell.update(|d| d.set_form_error(message));
            return false;
        }
    };

    let saved = match &action {
        SaveAction::Create(user) => store.create(user).await,
        SaveAction::Update(id, user) => store.update(*id, user).await,
    };
    let saved = match saved {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!("Failed to save user: {}", e);
            cell.update(|d| d.set_form_error(SAVE_FAILED_MESSAGE));
            return false;
        }
    };
    tracing::info!("Saved user {} ({:?})", saved.display_name(), saved.id);

    cell.update(UserDirectory::finish_save);
    if let Err(e) = load_users(cell, store).await {
        tracing::error!("Failed to reload users after save: {}", e);
    }
    cell.update(|d| d.show_banner(BannerKind::Success, action.success_message()));
    true
}

/// Delete `user` on the backend, then reload and announce it.
///
/// A record without an id was never stored, so nothing happens. A failed
/// delete is logged and shown as an error banner; the collection is not
/// reloaded. Returns `true` when the record was deleted.
pub async fn delete_user<C, S>(cell: &mut C, store: &S, user: &User) -> bool
where
    C: DirectoryCell,
    S: UserStore,
{
    let Some(id) = user.id else {
        return false;
    };

    if let Err(e) = store.delete(id).await {
        tracing::error!("Failed to delete user {}: {}", id, e);
        cell.update(|d| d.show_banner(BannerKind::Error, DELETE_FAILED_MESSAGE));
        return false;
    }
    tracing::info!("Deleted user {}", id);

    if let Err(e) = load_users(cell, store).await {
        tracing::error!("Failed to reload users after delete: {}", e);
    }
    cell.update(|d| d.show_banner(BannerKind::Success, USER_DELETED_MESSAGE));
    true
}

/// Initial load on mount. A failure is logged and shown as an error banner.
pub async fn refresh_users<C, S>(cell: &mut C, store: &S) -> bool
where
    C: DirectoryCell,
    S: UserStore,
{
    match load_users(cell, store).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("{}", e);
            cell.update(|d| d.show_banner(BannerKind::Error, LOAD_FAILED_MESSAGE));
            false
        }
    }
}

/// Wait out `delay`, then clear banner `seq` unless a newer one replaced it.
///
/// Callers pass a sleep of [`BANNER_DURATION`] for their platform. Returns
/// `true` when the banner was cleared.
pub async fn expire_banner<C, D>(cell: &mut C, seq: u64, delay: D) -> bool
where
    C: DirectoryCell,
    D: Future<Output = ()>,
{
    delay.await;
    cell.update(|d| d.clear_banner(seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryUserStore;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Directory shared between a pending flow and the test body, counting
    /// every write that goes through the cell.
    #[derive(Clone, Default)]
    struct SharedCell {
        directory: Rc<RefCell<UserDirectory>>,
        writes: Rc<Cell<usize>>,
    }

    impl DirectoryCell for SharedCell {
        fn update<R>(&mut self, f: impl FnOnce(&mut UserDirectory) -> R) -> R {
            self.writes.set(self.writes.get() + 1);
            f(&mut self.directory.borrow_mut())
        }

        fn read<R>(&self, f: impl FnOnce(&UserDirectory) -> R) -> R {
            f(&self.directory.borrow())
        }
    }

    fn ada() -> User {
        User::new("Ada", "Lovelace", "1111111111", "ada@example.com").with_id(1)
    }

    fn grace() -> User {
        User::new("Grace", "Hopper", "2222222222", "grace@example.com").with_id(2)
    }

    async fn loaded(store: &MemoryUserStore) -> UserDirectory {
        let mut directory = UserDirectory::new();
        load_users(&mut directory, store).await.unwrap();
        directory
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let store = MemoryUserStore::with_users([ada(), grace()]);
        let mut directory = UserDirectory::new();
        directory.set_users(vec![User::default()]);

        load_users(&mut directory, &store).await.unwrap();
        assert_eq!(directory.users(), &[ada(), grace()]);
        assert!(!directory.is_loading());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_collection_and_clears_loading() {
        let store = MemoryUserStore::with_users([ada()]);
        let mut directory = loaded(&store).await;
        store.set_offline(true);

        assert!(load_users(&mut directory, &store).await.is_err());
        assert_eq!(directory.users(), &[ada()]);
        assert!(!directory.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_failure_shows_error_banner() {
        let store = MemoryUserStore::new();
        store.set_offline(true);
        let mut directory = UserDirectory::new();

        assert!(!refresh_users(&mut directory, &store).await);
        let banner = directory.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_add_with_existing_phone_is_refused_without_network_call() {
        let store = MemoryUserStore::with_users([ada()]);
        let mut directory = loaded(&store).await;
        let requests = store.request_count();

        directory.begin_add();
        let duplicate = User::new("Alan", "Turing", "1111111111", "alan@example.com");
        assert!(!submit_user(&mut directory, &store, duplicate).await);

        assert_eq!(directory.form_error(), Some(DUPLICATE_PHONE_MESSAGE));
        assert_eq!(store.request_count(), requests);
        assert_eq!(store.snapshot(), vec![ada()]);
        assert_eq!(directory.users(), &[ada()]);
        assert!(directory.is_modal_open());
    }

    #[tokio::test]
    async fn test_successful_create_reloads_then_announces() {
        let store = MemoryUserStore::with_users([ada()]);
        let mut directory = loaded(&store).await;
        directory.begin_add();

        let new_user = User::new("Grace", "Hopper", "2222222222", "grace@example.com");
        assert!(submit_user(&mut directory, &store, new_user).await);

        assert_eq!(directory.users().len(), 2);
        assert_eq!(directory.users()[1].id, Some(2));
        assert_eq!(directory.form_error(), None);
        let banner = directory.banner().unwrap().clone();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.message, USER_ADDED_MESSAGE);

        // expiry clears exactly this banner
        assert!(directory.clear_banner(banner.seq));
        assert!(directory.banner().is_none());
    }

    #[tokio::test]
    async fn test_edit_keeping_own_phone_bypasses_duplicate_check() {
        let store = MemoryUserStore::with_users([ada(), grace()]);
        let mut directory = loaded(&store).await;
        directory.begin_edit(&ada());
        assert_eq!(directory.editing_user(), Some(&ada()));

        let mut changed = ada();
        changed.last_name = "Byron".to_string();
        assert!(submit_user(&mut directory, &store, changed).await);

        assert_eq!(store.snapshot()[0].last_name, "Byron");
        assert_eq!(directory.users()[0].last_name, "Byron");
        assert!(directory.editing().is_none());
        assert_eq!(directory.banner().unwrap().message, USER_UPDATED_MESSAGE);
    }

    #[tokio::test]
    async fn test_edit_taking_another_users_phone_is_refused() {
        let store = MemoryUserStore::with_users([ada(), grace()]);
        let mut directory = loaded(&store).await;
        directory.begin_edit(&ada());

        let mut changed = ada();
        changed.phone = grace().phone;
        assert!(!submit_user(&mut directory, &store, changed).await);
        assert_eq!(directory.form_error(), Some(DUPLICATE_PHONE_MESSAGE));
        assert!(directory.editing().is_some());
        assert_eq!(store.snapshot(), vec![ada(), grace()]);
    }

    #[tokio::test]
    async fn test_edit_to_new_unique_phone_updates() {
        let store = MemoryUserStore::with_users([ada(), grace()]);
        let mut directory = loaded(&store).await;
        directory.begin_edit(&ada());

        let mut changed = ada();
        changed.phone = "3333333333".to_string();
        assert!(submit_user(&mut directory, &store, changed).await);
        assert_eq!(store.snapshot()[0].phone, "3333333333");
    }

    #[tokio::test]
    async fn test_backend_failure_on_save_leaves_state_unchanged() {
        let store = MemoryUserStore::with_users([ada()]);
        let mut directory = loaded(&store).await;
        directory.begin_edit(&ada());
        store.set_offline(true);

        let mut changed = ada();
        changed.email = "ada@lovelace.org".to_string();
        assert!(!submit_user(&mut directory, &store, changed).await);

        assert_eq!(directory.form_error(), Some(SAVE_FAILED_MESSAGE));
        assert_eq!(directory.users(), &[ada()]);
        assert!(directory.editing().is_some());
        assert!(directory.banner().is_none());
    }

    #[tokio::test]
    async fn test_delete_without_id_is_a_no_op() {
        let store = MemoryUserStore::with_users([ada()]);
        let mut directory = loaded(&store).await;
        let requests = store.request_count();

        let unsaved = User::new("Nobody", "Here", "9999999999", "no@body.com");
        assert!(!delete_user(&mut directory, &store, &unsaved).await);
        assert_eq!(store.request_count(), requests);
        assert!(directory.banner().is_none());
    }

    #[tokio::test]
    async fn test_delete_reloads_and_announces() {
        let store = MemoryUserStore::with_users([ada(), grace()]);
        let mut directory = loaded(&store).await;

        assert!(delete_user(&mut directory, &store, &ada()).await);
        assert_eq!(directory.users(), &[grace()]);
        assert_eq!(directory.banner().unwrap().message, USER_DELETED_MESSAGE);
    }

    #[tokio::test]
    async fn test_failed_delete_shows_error_banner() {
        let store = MemoryUserStore::with_users([ada()]);
        let mut directory = loaded(&store).await;
        store.set_offline(true);

        assert!(!delete_user(&mut directory, &store, &ada()).await);
        let banner = directory.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, DELETE_FAILED_MESSAGE);
        assert_eq!(directory.users(), &[ada()]);
    }

    #[test]
    fn test_stale_expiry_does_not_clear_newer_banner() {
        let mut directory = UserDirectory::new();
        let first = directory.show_banner(BannerKind::Success, USER_ADDED_MESSAGE);
        let second = directory.show_banner(BannerKind::Success, USER_DELETED_MESSAGE);

        assert!(!directory.clear_banner(first));
        assert_eq!(directory.banner().unwrap().message, USER_DELETED_MESSAGE);
        assert!(directory.clear_banner(second));
        assert!(directory.banner().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_expires_after_full_duration() {
        let cell = SharedCell::default();
        let seq = cell
            .directory
            .borrow_mut()
            .show_banner(BannerKind::Success, USER_ADDED_MESSAGE);

        let mut timer_cell = cell.clone();
        let expiry = expire_banner(&mut timer_cell, seq, tokio::time::sleep(BANNER_DURATION));
        tokio::pin!(expiry);

        let early = tokio::time::timeout(Duration::from_millis(2499), expiry.as_mut()).await;
        assert!(early.is_err());
        assert!(cell.directory.borrow().banner().is_some());

        let cleared = tokio::time::timeout(Duration::from_millis(1), expiry.as_mut()).await;
        assert_eq!(cleared, Ok(true));
        assert!(cell.directory.borrow().banner().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_banner_outlives_older_timer() {
        let cell = SharedCell::default();
        let first = cell
            .directory
            .borrow_mut()
            .show_banner(BannerKind::Success, USER_ADDED_MESSAGE);

        let mut timer_cell = cell.clone();
        let expiry = expire_banner(&mut timer_cell, first, tokio::time::sleep(BANNER_DURATION));
        tokio::pin!(expiry);

        let pending = tokio::time::timeout(Duration::from_millis(1000), expiry.as_mut()).await;
        assert!(pending.is_err());
        cell.directory
            .borrow_mut()
            .show_banner(BannerKind::Error, DELETE_FAILED_MESSAGE);

        assert!(!expiry.await);
        let directory = cell.directory.borrow();
        assert_eq!(directory.banner().unwrap().message, DELETE_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_refused_save_only_writes_the_form_error() {
        let store = MemoryUserStore::with_users([ada()]);
        let mut cell = SharedCell::default();
        load_users(&mut cell, &store).await.unwrap();
        cell.update(UserDirectory::begin_add);
        cell.writes.set(0);

        let clash = User::new("Alan", "Turing", "1111111111", "alan@example.com");
        assert!(!submit_user(&mut cell, &store, clash).await);

        assert_eq!(cell.writes.get(), 1);
        let error = cell.read(|d| d.form_error().map(str::to_string));
        assert_eq!(error.as_deref(), Some(DUPLICATE_PHONE_MESSAGE));
    }

    #[test]
    fn test_edit_and_add_transitions() {
        let mut directory = UserDirectory::new();
        directory.set_users(vec![ada()]);
        directory.set_form_error("stale");

        directory.begin_edit(&ada());
        assert!(directory.is_modal_open());
        assert_eq!(directory.form_error(), None);
        assert_eq!(
            directory.editing(),
            Some(&EditSession {
                id: 1,
                original_phone: "1111111111".to_string()
            })
        );

        directory.set_form_error("stale");
        directory.begin_add();
        assert!(directory.editing().is_none());
        assert!(directory.editing_user().is_none());
        assert_eq!(directory.form_error(), None);

        directory.close_modal();
        assert!(!directory.is_modal_open());
    }

    #[test]
    fn test_edit_of_unsaved_record_starts_add_mode() {
        let mut directory = UserDirectory::new();
        directory.begin_edit(&User::new("A", "B", "1234567890", "a@b.com"));
        assert!(directory.is_modal_open());
        assert!(directory.editing().is_none());
    }

    #[test]
    fn test_plan_save_branches() {
        let mut directory = UserDirectory::new();
        directory.set_users(vec![ada(), grace()]);

        let fresh = User::new("Alan", "Turing", "4444444444", "alan@example.com");
        assert_eq!(directory.plan_save(fresh.clone()), Ok(SaveAction::Create(fresh)));

        directory.begin_edit(&grace());
        assert_eq!(
            directory.plan_save(grace()),
            Ok(SaveAction::Update(2, grace()))
        );
        let mut stolen = grace();
        stolen.phone = ada().phone;
        assert_eq!(directory.plan_save(stolen), Err(DUPLICATE_PHONE_MESSAGE));
    }
}
