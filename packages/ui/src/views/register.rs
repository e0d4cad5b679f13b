use dioxus::prelude::*;

use crate::auth::use_app;
use crate::platform::sleep;
use crate::register_form::{submit_register, RegisterForm, REGISTER_REDIRECT_DELAY};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Sign-up form. Shows the success message for a moment, then calls `on_success`.
#[component]
pub fn Register(on_success: EventHandler<()>, on_switch_to_login: EventHandler<()>) -> Element {
    let app = use_app();
    let mut form = use_signal(RegisterForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            if submit_register(&app.auth, &app.session, &form).await {
                sleep(REGISTER_REDIRECT_DELAY).await;
                on_success.call(());
            }
        });
    };

    let submitting = form.read().is_submitting();
    let locked = form.read().is_locked();
    let error = form.read().error.clone();
    let success = form.read().success.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-container",
            h2 { "Register" }
            form {
                onsubmit: handle_submit,
                div {
                    class: "form-group",
                    label { r#for: "register-username", "Username" }
                    input {
                        id: "register-username",
                        r#type: "text",
                        required: true,
                        value: form.read().username.clone(),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "register-email", "Email" }
                    input {
                        id: "register-email",
                        r#type: "email",
                        required: true,
                        value: form.read().email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "register-password", "Password" }
                    input {
                        id: "register-password",
                        r#type: "password",
                        required: true,
                        value: form.read().password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }
                if let Some(error) = error {
                    div { class: "error", "{error}" }
                }
                if let Some(success) = success {
                    div { class: "success", "{success}" }
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: locked,
                    if submitting { "Registering..." } else { "Register" }
                }
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: move |_| on_switch_to_login.call(()),
                    "Back to login"
                }
            }
        }
    }
}
