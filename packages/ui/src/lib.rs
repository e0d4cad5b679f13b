//! This crate contains all shared UI for the workspace.
//!
//! Form and board state live in plain structs driven by async actions
//! (`login_form`, `register_form`, `memo_board`); the components in `views`
//! only bind them to signals and render.

mod auth;
pub use auth::{use_app, AppContext, SessionProvider};

pub mod cell;
pub use cell::StateCell;

mod dialog;
pub use dialog::{alert, confirm};

pub mod login_form;
pub mod memo_board;
pub mod register_form;

mod platform;
pub use platform::{make_token_store, navigate_to_root};

mod shell;
pub use shell::{AppShell, Shell, View};

pub mod views;

#[cfg(test)]
mod testing;
