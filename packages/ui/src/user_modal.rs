use std::future::Future;

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use store::User;

use crate::UserForm;

/// Async save handler: resolves to `true` once the record is stored.
pub type SubmitHandler = Callback<User, LocalBoxFuture<'static, bool>>;

/// Hosts [`UserForm`] in a centered overlay.
///
/// The title follows the mode: "Update User" with initial data, "Add User"
/// without. A submit that resolves to success closes the modal; a failed
/// one leaves it open so the input can be corrected. Clicking the backdrop
/// closes it.
#[component]
pub fn UserModal(
    open: bool,
    initial_data: Option<User>,
    form_error: Option<String>,
    on_submit: SubmitHandler,
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    let title = if initial_data.is_some() { "Update User" } else { "Add User" };

    let handle_submit = move |user: User| {
        let pending = on_submit.call(user);
        spawn(async move {
            close_on_success(pending, || on_close.call(())).await;
        });
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div {
                    class: "modal-body",
                    UserForm {
                        initial_data,
                        form_error,
                        on_submit: handle_submit,
                    }
                }
            }
        }
    }
}

/// Await a pending save and close only if it succeeded, so a refused or
/// failed save leaves the form up for correction.
async fn close_on_success(pending: impl Future<Output = bool>, close: impl FnOnce()) -> bool {
    let saved = pending.await;
    if saved {
        close();
    }
    saved
}
