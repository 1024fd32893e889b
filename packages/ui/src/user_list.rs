use dioxus::prelude::*;
use store::User;

use crate::icons::{FaPenToSquare, FaTrashCan};
use crate::Icon;

/// Table of users with per-row edit and delete actions.
///
/// Actions hand the row's record back to the caller, so the caller can
/// address it by id rather than by position.
#[component]
pub fn UserList(users: Vec<User>, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    if users.is_empty() {
        return rsx! {
            div { class: "empty-state", "No users added yet." }
        };
    }

    rsx! {
        div {
            class: "table-wrapper",
            table {
                class: "user-table",
                thead {
                    tr {
                        th { "First Name" }
                        th { "Last Name" }
                        th { "Phone" }
                        th { "Email" }
                        th { class: "actions-col", "Actions" }
                    }
                }
                tbody {
                    for (index, user) in users.into_iter().enumerate() {
                        UserRow {
                            key: "{row_key(&user, index)}",
                            user,
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

/// Stable id when the backend assigned one, position otherwise.
fn row_key(user: &User, index: usize) -> String {
    match user.id {
        Some(id) => id.to_string(),
        None => format!("row-{index}"),
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let edit_target = user.clone();
    let delete_target = user.clone();

    rsx! {
        tr {
            td { "{user.first_name}" }
            td { "{user.last_name}" }
            td { "{user.phone}" }
            td { "{user.email}" }
            td {
                class: "actions-col",
                button {
                    class: "icon-button edit",
                    title: "Edit user",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "icon-button delete",
                    title: "Delete user",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}
