mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod memos;
pub use memos::Memos;
