use dioxus::prelude::*;

use crate::auth::use_app;
use crate::login_form::{submit_login, LoginForm};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Username/password form. Calls `on_success` once the token is stored.
#[component]
pub fn Login(on_success: EventHandler<()>, on_switch_to_register: EventHandler<()>) -> Element {
    let app = use_app();
    let mut form = use_signal(LoginForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            if submit_login(&app.auth, &app.session, &form).await {
                on_success.call(());
            }
        });
    };

    let submitting = form.read().is_submitting();
    let error = form.read().error.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-container",
            h2 { "Login" }
            form {
                onsubmit: handle_submit,
                div {
                    class: "form-group",
                    label { r#for: "login-username", "Username" }
                    input {
                        id: "login-username",
                        r#type: "text",
                        required: true,
                        value: form.read().username.clone(),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        required: true,
                        value: form.read().password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }
                if let Some(error) = error {
                    div { class: "error", "{error}" }
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: submitting,
                    if submitting { "Logging in..." } else { "Login" }
                }
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: move |_| on_switch_to_register.call(()),
                    "Register"
                }
            }
        }
    }
}
