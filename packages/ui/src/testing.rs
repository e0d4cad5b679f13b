//! In-memory stand-ins for the auth and memo services.

use std::cell::RefCell;

use api::{
    ApiError, AuthService, AuthSession, Credentials, Memo, MemoDraft, MemoId, MemoService,
    Registration, UserInfo,
};
use serde_json::{json, Value};

pub fn status_error(status: u16, body: Value) -> ApiError {
    ApiError::Status {
        status,
        body: Some(body),
    }
}

pub struct FakeAuth {
    access: String,
    message: Option<String>,
    user: Option<UserInfo>,
    rejection: RefCell<Option<ApiError>>,
    logins: RefCell<Vec<Credentials>>,
    registrations: RefCell<Vec<Registration>>,
    profile_tokens: RefCell<Vec<String>>,
}

impl FakeAuth {
    /// Answers login and registration with `access`.
    pub fn accepting(access: &str) -> Self {
        Self {
            access: access.to_string(),
            message: None,
            user: None,
            rejection: RefCell::new(None),
            logins: RefCell::default(),
            registrations: RefCell::default(),
            profile_tokens: RefCell::default(),
        }
    }

    /// Fails the next login or registration with `err`.
    pub fn rejecting(err: ApiError) -> Self {
        let fake = Self::accepting("");
        fake.rejection.replace(Some(err));
        fake
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Answers `/me/` with `username`. Without it the profile request gets a 401.
    pub fn with_user(mut self, username: &str) -> Self {
        self.user = Some(UserInfo {
            id: Some(1),
            username: username.to_string(),
            email: None,
        });
        self
    }

    pub fn logins(&self) -> Vec<Credentials> {
        self.logins.borrow().clone()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.borrow().clone()
    }

    pub fn profile_tokens(&self) -> Vec<String> {
        self.profile_tokens.borrow().clone()
    }

    fn session(&self) -> Result<AuthSession, ApiError> {
        if let Some(err) = self.rejection.take() {
            return Err(err);
        }
        Ok(AuthSession {
            access: self.access.clone(),
            refresh: Some("refresh".to_string()),
            user: self.user.clone(),
            message: self.message.clone(),
        })
    }
}

impl AuthService for FakeAuth {
    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        self.registrations.borrow_mut().push(registration.clone());
        self.session()
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        self.logins.borrow_mut().push(credentials.clone());
        self.session()
    }

    async fn get_user_info(&self, token: &str) -> Result<UserInfo, ApiError> {
        self.profile_tokens.borrow_mut().push(token.to_string());
        self.user.clone().ok_or_else(|| {
            status_error(401, json!({"detail": "Authentication credentials were not provided."}))
        })
    }
}

/// A request received by [`FakeMemos`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoCall {
    List,
    Get(MemoId),
    Create(MemoDraft),
    Update(MemoId, MemoDraft),
    Delete(MemoId),
}

#[derive(Default)]
pub struct FakeMemos {
    memos: RefCell<Vec<Memo>>,
    next_id: RefCell<MemoId>,
    failure: RefCell<Option<u16>>,
    unreadable_bodies: bool,
    calls: RefCell<Vec<MemoCall>>,
}

impl FakeMemos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out holding one memo per `(title, content)` pair.
    pub fn seeded(memos: &[(&str, &str)]) -> Self {
        let fake = Self::new();
        for (title, content) in memos {
            let memo = fake.insert(&MemoDraft::new(*title, *content));
            fake.memos.borrow_mut().push(memo);
        }
        fake
    }

    /// Create and update succeed without returning the memo.
    pub fn with_unreadable_bodies(mut self) -> Self {
        self.unreadable_bodies = true;
        self
    }

    /// Fails the next request with `status`.
    pub fn fail_next(&self, status: u16) {
        self.failure.replace(Some(status));
    }

    pub fn calls(&self) -> Vec<MemoCall> {
        self.calls.borrow().clone()
    }

    pub fn snapshot(&self) -> Vec<Memo> {
        self.memos.borrow().clone()
    }

    fn record(&self, call: MemoCall) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.take() {
            Some(status) => Err(status_error(status, json!({"detail": "failed"}))),
            None => Ok(()),
        }
    }

    fn insert(&self, draft: &MemoDraft) -> Memo {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        memo(id, draft)
    }

    fn not_found() -> ApiError {
        status_error(404, json!({"detail": "Not found."}))
    }
}

fn memo(id: MemoId, draft: &MemoDraft) -> Memo {
    serde_json::from_value(json!({
        "id": id,
        "user_id": 1,
        "title": draft.title,
        "content": draft.content,
        "created_at": "2024-05-01T09:30:00Z",
    }))
    .expect("valid memo")
}

impl MemoService for FakeMemos {
    async fn get_memos(&self) -> Result<Vec<Memo>, ApiError> {
        self.record(MemoCall::List)?;
        Ok(self.snapshot())
    }

    async fn get_memo(&self, id: MemoId) -> Result<Memo, ApiError> {
        self.record(MemoCall::Get(id))?;
        self.memos
            .borrow()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_memo(&self, draft: &MemoDraft) -> Result<Option<Memo>, ApiError> {
        self.record(MemoCall::Create(draft.clone()))?;
        let memo = self.insert(draft);
        self.memos.borrow_mut().push(memo.clone());
        Ok(Some(memo).filter(|_| !self.unreadable_bodies))
    }

    async fn update_memo(&self, id: MemoId, draft: &MemoDraft) -> Result<Option<Memo>, ApiError> {
        self.record(MemoCall::Update(id, draft.clone()))?;
        let mut memos = self.memos.borrow_mut();
        let memo = memos
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(Self::not_found)?;
        memo.title = draft.title.clone();
        memo.content = draft.content.clone();
        Ok(Some(memo.clone()).filter(|_| !self.unreadable_bodies))
    }

    async fn delete_memo(&self, id: MemoId) -> Result<(), ApiError> {
        self.record(MemoCall::Delete(id))?;
        let mut memos = self.memos.borrow_mut();
        let before = memos.len();
        memos.retain(|m| m.id != id);
        if memos.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
