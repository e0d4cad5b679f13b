//! # App shell: which top-level view is on screen
//!
//! [`Shell`] is the in-memory state machine behind the single-page app. There
//! is no routing and no history: the view is derived from whether a token is
//! present plus a transient "show register" flag.
//!
//! | From | Event | To |
//! |------|-------|----|
//! | start, token present | | Memos |
//! | start, no token | | Login |
//! | Login | switch to register | Register |
//! | Register | switch to login | Login |
//! | Login / Register | login or register success | Memos |
//! | Memos | logout | Login |
//!
//! A token that is present but stale still lands on Memos; the first `401`
//! from the memo service expires the session and sends the user back here.

use api::Session;
use dioxus::prelude::*;

use crate::auth::use_app;
use crate::views::{Login, Memos, Register};

/// Top-level view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Memos,
}

/// State of the app shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shell {
    authenticated: bool,
    show_register: bool,
}

impl Shell {
    /// Initial state, derived only from token presence.
    pub fn from_session(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            show_register: false,
        }
    }

    pub fn view(&self) -> View {
        if self.authenticated {
            View::Memos
        } else if self.show_register {
            View::Register
        } else {
            View::Login
        }
    }

    /// Login or registration succeeded.
    pub fn signed_in(&mut self) {
        self.authenticated = true;
        self.show_register = false;
    }

    pub fn show_register(&mut self) {
        self.show_register = true;
    }

    pub fn show_login(&mut self) {
        self.show_register = false;
    }

    pub fn logged_out(&mut self) {
        self.authenticated = false;
        self.show_register = false;
    }

    /// Start over from the token store once the session has expired at least once.
    pub fn sync_expiry(&mut self, expiry_epoch: u64, session: &Session) {
        if expiry_epoch > 0 {
            *self = Self::from_session(session);
        }
    }
}

/// Root component: renders Login, Register or Memos.
#[component]
pub fn AppShell() -> Element {
    let app = use_app();
    let session = app.session.clone();
    let mut shell = use_signal(|| Shell::from_session(&session));

    // Session expired without a page navigation: start over from the token store
    let expiry_epoch = app.expiry_epoch;
    let session = app.session.clone();
    use_effect(move || {
        let epoch = *expiry_epoch.read();
        shell.write().sync_expiry(epoch, &session);
    });

    match shell().view() {
        View::Login => rsx! {
            Login {
                on_success: move |_| shell.write().signed_in(),
                on_switch_to_register: move |_| shell.write().show_register(),
            }
        },
        View::Register => rsx! {
            Register {
                on_success: move |_| shell.write().signed_in(),
                on_switch_to_login: move |_| shell.write().show_login(),
            }
        },
        View::Memos => rsx! {
            Memos {
                on_logout: move |_| shell.write().logged_out(),
            }
        },
    }
}
