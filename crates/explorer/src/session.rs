//! Per-session connection state.
//!
//! One `Session` replaces the ambient globals of a typical extension host:
//! it owns the connection settings, the lazily-built HTTP client, and the
//! single mutable "current directory" string used to resolve save-back
//! destinations. Flows receive it by reference instead of reaching for
//! shared statics.

use std::sync::{Arc, RwLock};

use jupyter_explorer_contents::{ContentsClient, ContentsError};

/// Connection settings, immutable for the lifetime of a connection.
#[derive(Debug, Clone)]
pub struct Connection {
    pub server_url: String,
    pub token: String,
    pub remote_root: String,
}

/// Live session state shared by the tree, the flows, and the filesystem
/// adapter.
///
/// `current_dir` is written on every successful listing and read by
/// save-back. Two flows racing on it can interleave; single-user
/// interactive use is sequential, so this is a documented limitation
/// rather than a locking policy.
pub struct Session {
    connection: RwLock<Option<Connection>>,
    client: RwLock<Option<Arc<ContentsClient>>>,
    current_dir: RwLock<Option<String>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A disconnected session. Every remote operation fails with
    /// [`ContentsError::NotConnected`] until [`Self::set_connection`] runs.
    pub fn new() -> Self {
        Self {
            connection: RwLock::new(None),
            client: RwLock::new(None),
            current_dir: RwLock::new(None),
        }
    }

    /// Establish (or re-establish) the connection, rebuilding the HTTP
    /// client. Resets the current directory.
    pub fn set_connection(&self, connection: Connection) -> Result<(), ContentsError> {
        let client = ContentsClient::new(&connection.server_url, &connection.token)?;
        *self.client.write().unwrap() = Some(Arc::new(client));
        *self.connection.write().unwrap() = Some(connection);
        *self.current_dir.write().unwrap() = None;
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.client.read().unwrap().is_some()
    }

    /// Handle to the authenticated client, or `NotConnected`.
    pub fn client(&self) -> Result<Arc<ContentsClient>, ContentsError> {
        self.client
            .read()
            .unwrap()
            .clone()
            .ok_or(ContentsError::NotConnected)
    }

    /// Root path configured for this connection (`/` while disconnected).
    pub fn remote_root(&self) -> String {
        self.connection
            .read()
            .unwrap()
            .as_ref()
            .map_or_else(|| "/".to_string(), |c| c.remote_root.clone())
    }

    /// Last directory successfully listed, if any.
    pub fn current_dir(&self) -> Option<String> {
        self.current_dir.read().unwrap().clone()
    }

    /// Record the most recent successful listing.
    pub fn set_current_dir(&self, path: &str) {
        *self.current_dir.write().unwrap() = Some(path.to_string());
    }

    /// Base directory for save-back: the last listed directory, falling
    /// back to the remote root when nothing has been listed yet.
    pub fn save_base(&self) -> String {
        self.current_dir()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.remote_root())
    }
}
