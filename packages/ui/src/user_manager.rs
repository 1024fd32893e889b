//! # User manager: the application controller component
//!
//! Owns the [`UserDirectory`] signal and wires the list, the modal and the
//! banner to the async flows in [`store::directory`]. Every flow runs as a
//! task on this component's scope, so closing the modal never cancels a
//! save that is already in flight.

use api::HttpUserStore;
use dioxus::prelude::*;
use futures::channel::oneshot;
use futures::FutureExt;
use store::{delete_user, refresh_users, submit_user, DirectoryCell, User, UserDirectory};

use crate::status_banner::schedule_banner_expiry;
use crate::{StatusBanner, UserList, UserModal};

const USERS_CSS: Asset = asset!("/assets/styling/users.css");

/// Lets the store's flows update the directory signal without holding a
/// borrow across an await.
#[derive(Clone, Copy)]
pub(crate) struct DirectoryHandle(pub(crate) Signal<UserDirectory>);

impl DirectoryCell for DirectoryHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut UserDirectory) -> R) -> R {
        self.0.with_mut(f)
    }

    // Peek: reads neither subscribe the caller nor mark the signal dirty
    fn read<R>(&self, f: impl FnOnce(&UserDirectory) -> R) -> R {
        f(&self.0.peek())
    }
}

#[component]
pub fn UserManager(store: HttpUserStore) -> Element {
    let mut directory = use_signal(UserDirectory::new);

    // Load the collection once on mount
    let _loader = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move {
                refresh_users(&mut DirectoryHandle(directory), &store).await;
                schedule_banner_expiry(directory);
            }
        }
    });

    let on_submit = use_callback({
        let store = store.clone();
        move |user: User| {
            let store = store.clone();
            let (tx, rx) = oneshot::channel();
            spawn(async move {
                let saved = submit_user(&mut DirectoryHandle(directory), &store, user).await;
                if saved {
                    schedule_banner_expiry(directory);
                }
                let _ = tx.send(saved);
            });
            async move { rx.await.unwrap_or(false) }.boxed_local()
        }
    });

    let on_delete = {
        let store = store.clone();
        move |user: User| {
            let store = store.clone();
            spawn(async move {
                delete_user(&mut DirectoryHandle(directory), &store, &user).await;
                schedule_banner_expiry(directory);
            });
        }
    };

    let state = directory();

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "page-wrapper",

            div {
                class: "top-bar",
                h5 { "User Management System" }
                button {
                    class: "add-user-btn",
                    onclick: move |_| directory.write().begin_add(),
                    "+ Add User"
                }
            }

            UserModal {
                open: state.is_modal_open(),
                initial_data: state.editing_user().cloned(),
                form_error: state.form_error().map(str::to_string),
                on_submit,
                on_close: move |_| directory.write().close_modal(),
            }

            if state.is_loading() {
                p { class: "info-text", "Loading users..." }
            }

            if let Some(banner) = state.banner().cloned() {
                StatusBanner { banner }
            }

            UserList {
                users: state.users().to_vec(),
                on_edit: move |user: User| directory.write().begin_edit(&user),
                on_delete,
            }
        }
    }
}
