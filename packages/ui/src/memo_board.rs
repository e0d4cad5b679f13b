//! # Memo board: state and actions of the Memos view
//!
//! [`MemoBoard`] holds everything the Memos view shows: the memo list, the
//! user profile, the create form, and the shadow fields of the one memo being
//! edited. The async actions below drive it against a [`MemoService`]:
//!
//! | Action | Requests | Then |
//! |--------|----------|------|
//! | [`load_user`] | `GET /me/` | profile shown; failure only logged |
//! | [`load_memos`] | `GET /` | list replaced; failure only logged |
//! | [`create_memo`] | `POST /` | form cleared, list reloaded |
//! | [`save_edit`] | `PUT /{id}` | edit mode left, list reloaded |
//! | [`delete_memo`] | `DELETE /{id}` after confirmation | list reloaded |
//!
//! Mutations return the [`ApiError`] for the view to report; reads never
//! fail loudly. Each mutation is tracked as in flight, and a second request
//! for the same operation is skipped until the first one settles.
//!
//! A failed save keeps edit mode and the shadow fields so the edit can be
//! retried.

use std::collections::HashSet;
use std::future::Future;

use api::{ApiError, AuthService, Memo, MemoDraft, MemoId, MemoService, Session, UserInfo};

use crate::cell::StateCell;

/// Shadow fields of the memo being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditState {
    pub id: MemoId,
    pub title: String,
    pub content: String,
}

impl EditState {
    pub fn draft(&self) -> MemoDraft {
        MemoDraft::new(self.title.clone(), self.content.clone())
    }
}

/// Whether an action reached the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Nothing was sent: empty input, missing confirmation, or already in flight.
    Skipped,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoBoard {
    pub memos: Vec<Memo>,
    pub user: Option<UserInfo>,
    /// Create form.
    pub draft: MemoDraft,
    pub editing: Option<EditState>,
    creating: bool,
    saving: HashSet<MemoId>,
    deleting: HashSet<MemoId>,
}

impl MemoBoard {
    pub fn replace_memos(&mut self, memos: Vec<Memo>) {
        self.memos = memos;
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn is_saving(&self, id: MemoId) -> bool {
        self.saving.contains(&id)
    }

    pub fn is_deleting(&self, id: MemoId) -> bool {
        self.deleting.contains(&id)
    }

    pub fn editing_id(&self) -> Option<MemoId> {
        self.editing.as_ref().map(|e| e.id)
    }

    /// The create form's contents, if both fields are filled and no create is in flight.
    pub fn begin_create(&mut self) -> Option<MemoDraft> {
        if self.creating || !self.draft.is_complete() {
            return None;
        }
        self.creating = true;
        Some(self.draft.clone())
    }

    pub fn finish_create(&mut self, created: bool) {
        self.creating = false;
        if created {
            self.draft = MemoDraft::default();
        }
    }

    /// Enter edit mode on `memo`, silently dropping any other unsaved edit.
    pub fn start_edit(&mut self, memo: &Memo) {
        self.editing = Some(EditState {
            id: memo.id,
            title: memo.title.clone(),
            content: memo.content.clone(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The shadow fields of `id`, if it is being edited and not already saving.
    pub fn begin_save(&mut self, id: MemoId) -> Option<MemoDraft> {
        let draft = self.editing.as_ref().filter(|e| e.id == id)?.draft();
        if !self.saving.insert(id) {
            return None;
        }
        Some(draft)
    }

    pub fn finish_save(&mut self, id: MemoId, saved: bool) {
        self.saving.remove(&id);
        if saved && self.editing_id() == Some(id) {
            self.editing = None;
        }
    }

    /// Mark `id` as being deleted. `false` if a delete is already in flight.
    pub fn begin_delete(&mut self, id: MemoId) -> bool {
        self.deleting.insert(id)
    }

    pub fn finish_delete(&mut self, id: MemoId) {
        self.deleting.remove(&id);
    }
}

/// Fetch the user profile for display. Failures are logged only.
pub async fn load_user<A, C>(auth: &A, session: &Session, board: &C)
where
    A: AuthService,
    C: StateCell<MemoBoard>,
{
    let Some(token) = session.token() else {
        tracing::warn!("No session token, skipping user profile");
        return;
    };
    match auth.get_user_info(&token).await {
        Ok(user) => board.update(|b| b.user = Some(user)),
        Err(e) => tracing::error!("Failed to load user info: {}", e),
    }
}

/// Replace the memo list with the server's. Failures are logged only.
pub async fn load_memos<S, C>(memos: &S, board: &C)
where
    S: MemoService,
    C: StateCell<MemoBoard>,
{
    match memos.get_memos().await {
        Ok(list) => board.update(|b| b.replace_memos(list)),
        Err(e) => tracing::error!("Failed to load memos: {}", e),
    }
}

/// Create a memo from the create form, then reload the list.
pub async fn create_memo<S, C>(memos: &S, board: &C) -> Result<Outcome, ApiError>
where
    S: MemoService,
    C: StateCell<MemoBoard>,
{
    let Some(draft) = board.update(MemoBoard::begin_create) else {
        return Ok(Outcome::Skipped);
    };

    let result = memos.create_memo(&draft).await;
    board.update(|b| b.finish_create(result.is_ok()));
    if let Some(memo) = result? {
        tracing::debug!("Created memo {}", memo.id);
    }

    load_memos(memos, board).await;
    Ok(Outcome::Done)
}

/// Send the shadow fields of `id`, leave edit mode, then reload the list.
pub async fn save_edit<S, C>(memos: &S, board: &C, id: MemoId) -> Result<Outcome, ApiError>
where
    S: MemoService,
    C: StateCell<MemoBoard>,
{
    let Some(draft) = board.update(|b| b.begin_save(id)) else {
        return Ok(Outcome::Skipped);
    };

    let result = memos.update_memo(id, &draft).await;
    board.update(|b| b.finish_save(id, result.is_ok()));
    result?;

    load_memos(memos, board).await;
    Ok(Outcome::Done)
}

/// Delete `id` once `confirmation` resolves to `true`, then reload the list.
pub async fn delete_memo<S, C, F>(
    memos: &S,
    board: &C,
    id: MemoId,
    confirmation: F,
) -> Result<Outcome, ApiError>
where
    S: MemoService,
    C: StateCell<MemoBoard>,
    F: Future<Output = bool>,
{
    if board.update(|b| b.is_deleting(id)) {
        return Ok(Outcome::Skipped);
    }
    if !confirmation.await {
        return Ok(Outcome::Skipped);
    }
    if !board.update(|b| b.begin_delete(id)) {
        return Ok(Outcome::Skipped);
    }

    let result = memos.delete_memo(id).await;
    board.update(|b| b.finish_delete(id));
    result?;

    load_memos(memos, board).await;
    Ok(Outcome::Done)
}

/// Forget the session token and everything shown on the board.
pub fn logout<C: StateCell<MemoBoard>>(session: &Session, board: &C) {
    session.sign_out();
    board.update(|b| *b = MemoBoard::default());
}
