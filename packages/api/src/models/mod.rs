//! Wire models shared by the auth and memo services.

pub mod auth;
pub mod memo;
pub mod user;

pub use auth::{AuthSession, Credentials, Registration};
pub use memo::{Memo, MemoDraft, MemoId};
pub use user::UserInfo;
