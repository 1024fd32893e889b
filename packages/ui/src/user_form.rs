//! The add/edit form, rendered from the field schema.

use dioxus::prelude::*;
use store::{FormState, User, USER_FORM_SCHEMA};

/// One input per schema field. Keystrokes are sanitized before they are
/// stored; validation and change detection run on submit, and only a
/// record that passes both reaches `on_submit`.
#[component]
pub fn UserForm(
    initial_data: Option<User>,
    /// Error reported by the caller, e.g. a duplicate phone.
    form_error: Option<String>,
    on_submit: EventHandler<User>,
) -> Element {
    let mut state = use_signal(|| FormState::new(initial_data.as_ref()));

    // Start over whenever the record being edited changes
    use_effect(use_reactive!(|initial_data| {
        state.write().reset(initial_data.as_ref());
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = state.write().submit();
        if let Some(user) = submitted {
            on_submit.call(user);
        }
    };

    let current = state();
    let submit_label = if current.is_editing() { "Update User" } else { "Save User" };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,

            for spec in USER_FORM_SCHEMA.iter() {
                div {
                    key: "{spec.name.key()}",
                    class: "form-field",
                    label { r#for: "user-{spec.name.key()}", "{spec.label}" }
                    input {
                        id: "user-{spec.name.key()}",
                        class: if current.error(spec.name).is_some() { "form-input invalid" } else { "form-input" },
                        r#type: spec.input_type,
                        placeholder: spec.placeholder.unwrap_or_default(),
                        maxlength: spec.max_length.map(|n| n.to_string()),
                        value: current.value(spec.name).to_string(),
                        oninput: move |evt: FormEvent| state.write().set_value(spec.name, &evt.value()),
                    }
                    if let Some(message) = current.error(spec.name) {
                        p { class: "field-error", "{message}" }
                    }
                }
            }

            if let Some(message) = form_error {
                div { class: "alert alert-error", role: "alert", "{message}" }
            }
            if let Some(message) = current.notice() {
                div { class: "alert alert-warning", role: "alert", "{message}" }
            }

            button {
                class: "primary submit-button",
                r#type: "submit",
                "{submit_label}"
            }
        }
    }
}
