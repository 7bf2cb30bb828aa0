//! Virtual filesystem adapter.
//!
//! Exposes the remote server behind a URI scheme so the host can route
//! reads and writes through this plugin instead of the local disk. The
//! surface is deliberately read/write-only: directory listing, directory
//! creation, delete, and rename through this adapter signal "no
//! permissions" instead of attempting a remote equivalent.

use std::sync::Arc;
use std::time::SystemTime;

use thiserror::Error;
use tokio::sync::broadcast;

use jupyter_explorer_contents::ContentsError;

use crate::flows::{self, FlowError, FlowOutcome};
use crate::interaction::Interaction;
use crate::session::Session;

/// File metadata for the host's stat contract.
#[derive(Debug, Clone)]
pub struct FileStat {
    pub is_file: bool,
    pub is_dir: bool,
    pub size: u64,
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub readonly: bool,
}

impl FileStat {
    /// Fixed stat for a remote file; real sizes are never reported.
    pub fn file(size: u64) -> Self {
        let now = SystemTime::now();
        Self {
            is_file: true,
            is_dir: false,
            size,
            created: Some(now),
            modified: Some(now),
            readonly: false,
        }
    }
}

/// Options the host passes on write; accepted for contract compatibility.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    pub create: bool,
    pub overwrite: bool,
}

/// Fired after a successful write through the adapter.
#[derive(Debug, Clone)]
pub struct FileChangeEvent {
    pub uri: String,
}

/// Errors surfaced through the host filesystem contract.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("operation not permitted on the remote filesystem")]
    NoPermissions,

    #[error(transparent)]
    Remote(#[from] ContentsError),

    #[error("failed to render remote content: {0}")]
    Render(#[from] serde_json::Error),

    #[error("content is not valid UTF-8 text: {0}")]
    InvalidData(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// The filesystem provider registered for the remote scheme.
pub struct RemoteFs {
    session: Arc<Session>,
    interaction: Arc<dyn Interaction>,
    changes: broadcast::Sender<FileChangeEvent>,
}

impl RemoteFs {
    pub fn new(session: Arc<Session>, interaction: Arc<dyn Interaction>) -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            session,
            interaction,
            changes,
        }
    }

    /// Change-notification stream for the host's file watcher plumbing.
    pub fn subscribe(&self) -> broadcast::Receiver<FileChangeEvent> {
        self.changes.subscribe()
    }

    /// URI path portion as a remote path: the leading separator goes.
    fn remote_path(uri: &str) -> &str {
        uri.trim_start_matches('/')
    }

    /// Read a remote file as bytes.
    pub async fn read_file(&self, uri: &str) -> Result<Vec<u8>, FsError> {
        let client = self.session.client()?;
        let content = client.get_content(Self::remote_path(uri)).await?;
        Ok(content.to_text()?.into_bytes())
    }

    /// Write bytes back through the save-back flow (confirmation
    /// included), then announce the change. A declined confirmation is a
    /// no-op: no request, no change event, no error.
    pub async fn write_file(
        &self,
        uri: &str,
        content: &[u8],
        _options: WriteOptions,
    ) -> Result<(), FsError> {
        let text = std::str::from_utf8(content)?;
        let path = Self::remote_path(uri);

        let outcome =
            flows::save_back(&self.session, self.interaction.as_ref(), path, text).await?;
        if let FlowOutcome::Completed(()) = outcome {
            let _ = self.changes.send(FileChangeEvent {
                uri: uri.to_string(),
            });
        }
        Ok(())
    }

    /// Fixed stat; the adapter does not track remote metadata.
    pub fn stat(&self, _uri: &str) -> FileStat {
        FileStat::file(0)
    }

    /// No real change monitoring; the guard unsubscribes nothing.
    pub fn watch(&self, _uri: &str) -> WatchGuard {
        WatchGuard
    }

    pub fn read_directory(&self, _uri: &str) -> Result<Vec<(String, FileStat)>, FsError> {
        Err(FsError::NoPermissions)
    }

    pub fn create_directory(&self, _uri: &str) -> Result<(), FsError> {
        Err(FsError::NoPermissions)
    }

    pub fn delete(&self, _uri: &str) -> Result<(), FsError> {
        Err(FsError::NoPermissions)
    }

    pub fn rename(&self, _old_uri: &str, _new_uri: &str) -> Result<(), FsError> {
        Err(FsError::NoPermissions)
    }
}

/// Returned by [`RemoteFs::watch`]; dropping it is a no-op.
pub struct WatchGuard;
