use dioxus::prelude::*;

use api::{ApiError, Memo};

use crate::auth::use_app;
use crate::dialog::{alert, confirm};
use crate::memo_board::{self, load_memos, load_user, MemoBoard};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const CREATE_FAILED: &str = "Failed to create memo.";
const UPDATE_FAILED: &str = "Failed to update memo.";
const DELETE_FAILED: &str = "Failed to delete memo.";
const DELETE_PROMPT: &str = "Are you sure you want to delete this memo?";

async fn report(message: &str, err: &ApiError) {
    tracing::error!("{}: {}", message, err);
    alert(message).await;
}

/// The signed-in page: profile greeting, create form, and the memo list.
#[component]
pub fn Memos(on_logout: EventHandler<()>) -> Element {
    let app = use_app();
    let mut board = use_signal(MemoBoard::default);

    // Fetch profile and memos on mount
    let profile_app = app.clone();
    let _profile = use_resource(move || {
        let app = profile_app.clone();
        async move { load_user(&app.auth, &app.session, &board).await }
    });
    let list_app = app.clone();
    let _list = use_resource(move || {
        let app = list_app.clone();
        async move { load_memos(&app.memos, &board).await }
    });

    let create_app = app.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let app = create_app.clone();
        spawn(async move {
            if let Err(e) = memo_board::create_memo(&app.memos, &board).await {
                report(CREATE_FAILED, &e).await;
            }
        });
    };

    let logout_app = app.clone();
    let handle_logout = move |_: MouseEvent| {
        memo_board::logout(&logout_app.session, &board);
        on_logout.call(());
    };

    let state = board.read();
    let greeting = state
        .user
        .as_ref()
        .map(|user| format!("Welcome, {}!", user.display_name()));
    let creating = state.is_creating();
    let memos = state.memos.clone();
    drop(state);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "app",
            div {
                class: "header",
                h1 { "Memos" }
                div {
                    class: "header-user",
                    if let Some(greeting) = greeting {
                        span { "{greeting}" }
                    }
                    button { onclick: handle_logout, "Logout" }
                }
            }

            div {
                class: "memos-container",
                div {
                    class: "memo-form",
                    h3 { "New memo" }
                    form {
                        onsubmit: handle_create,
                        div {
                            class: "form-group",
                            label { r#for: "memo-title", "Title" }
                            input {
                                id: "memo-title",
                                r#type: "text",
                                required: true,
                                value: board.read().draft.title.clone(),
                                oninput: move |evt: FormEvent| board.write().draft.title = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "memo-content", "Content" }
                            textarea {
                                id: "memo-content",
                                required: true,
                                value: board.read().draft.content.clone(),
                                oninput: move |evt: FormEvent| board.write().draft.content = evt.value(),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn-primary",
                            disabled: creating,
                            "Add memo"
                        }
                    }
                }

                div {
                    class: "memo-list",
                    h3 { "My memos" }
                    if memos.is_empty() {
                        div { class: "no-memos", "No memos yet." }
                    }
                    for memo in memos {
                        MemoItem { key: "{memo.id}", memo: memo.clone(), board }
                    }
                }
            }
        }
    }
}

/// One memo, either read-only or in edit mode.
#[component]
fn MemoItem(memo: Memo, board: Signal<MemoBoard>) -> Element {
    let app = use_app();
    let mut board = board;
    let id = memo.id;

    let save_app = app.clone();
    let handle_save = move |_: MouseEvent| {
        let app = save_app.clone();
        spawn(async move {
            if let Err(e) = memo_board::save_edit(&app.memos, &board, id).await {
                report(UPDATE_FAILED, &e).await;
            }
        });
    };

    let delete_app = app.clone();
    let handle_delete = move |_: MouseEvent| {
        let app = delete_app.clone();
        spawn(async move {
            if let Err(e) = memo_board::delete_memo(&app.memos, &board, id, confirm(DELETE_PROMPT)).await {
                report(DELETE_FAILED, &e).await;
            }
        });
    };

    let state = board.read();
    let editing = state.editing.clone().filter(|edit| edit.id == id);
    let saving = state.is_saving(id);
    let deleting = state.is_deleting(id);
    drop(state);

    let title = memo.title.clone();
    let content = memo.content.clone();
    let created = memo.created_label();
    let edited = memo.was_edited();

    rsx! {
        div {
            class: "memo-item",
            if let Some(edit) = editing {
                div {
                    class: "form-group",
                    input {
                        r#type: "text",
                        value: edit.title,
                        oninput: move |evt: FormEvent| {
                            if let Some(edit) = board.write().editing.as_mut() {
                                edit.title = evt.value();
                            }
                        },
                    }
                }
                div {
                    class: "form-group",
                    textarea {
                        value: edit.content,
                        oninput: move |evt: FormEvent| {
                            if let Some(edit) = board.write().editing.as_mut() {
                                edit.content = evt.value();
                            }
                        },
                    }
                }
                div {
                    class: "memo-actions",
                    button { class: "btn-save", disabled: saving, onclick: handle_save, "Save" }
                    button {
                        class: "btn-cancel",
                        onclick: move |_| board.write().cancel_edit(),
                        "Cancel"
                    }
                }
            } else {
                h4 { "{title}" }
                p { "{content}" }
                small {
                    "Created {created}"
                    if edited {
                        " (edited)"
                    }
                }
                div {
                    class: "memo-actions",
                    button {
                        class: "btn-edit",
                        onclick: {
                            let memo = memo.clone();
                            move |_| board.write().start_edit(&memo)
                        },
                        "Edit"
                    }
                    button { class: "btn-delete", disabled: deleting, onclick: handle_delete, "Delete" }
                }
            }
        }
    }
}
