//! # Filesystem-backed token store
//!
//! [`FileStore`] persists the bearer token as a plain-text file so that a
//! desktop session survives restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── accessToken        # the bearer token, no trailing newline
//! ```
//!
//! Use [`dirs::data_dir()`] joined with `memopad` as the base on desktop:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/memopad/` |
//! | Linux | `~/.local/share/memopad/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\memopad\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::path::{Path, PathBuf};

use crate::token::{warn_on_failure, TokenStore, TOKEN_KEY};

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileStore {
    fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create token directory {}: {}", self.base.display(), e);
            return;
        }
        warn_on_failure(std::fs::write(self.token_path(), token), "persist token");
    }

    fn clear(&self) {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove token file: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("memopad");

        let store = FileStore::new(base.clone());
        assert!(store.get().is_none());

        // Directory is created lazily on first write
        store.set("tok123");
        assert!(base.join(TOKEN_KEY).exists());

        // Re-open from same directory
        let reopened = FileStore::new(base);
        assert_eq!(reopened.get().as_deref(), Some("tok123"));
    }

    #[test]
    fn test_clear_deletes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("tok123");
        store.clear();

        assert!(store.get().is_none());
        assert!(!dir.path().join(TOKEN_KEY).exists());

        // Nothing left to remove
        store.clear();
    }

    #[test]
    fn test_blank_file_reads_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TOKEN_KEY), "  \n").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.get().is_none());
    }
}
