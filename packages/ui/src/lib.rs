//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod user_form;
pub use user_form::UserForm;

mod user_modal;
pub use user_modal::{SubmitHandler, UserModal};

mod user_list;
pub use user_list::UserList;

mod status_banner;
pub use status_banner::{schedule_banner_expiry, StatusBanner};

mod user_manager;
pub use user_manager::UserManager;
