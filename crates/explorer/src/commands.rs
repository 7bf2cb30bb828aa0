//! Host-facing command surface.
//!
//! Thin adapter between the host's commands (connect, refresh, open,
//! delete, send-to-remote) and the flows. Every failure is caught here and
//! surfaced through the interaction port; nothing propagates into the host
//! and crashes a view.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::error;

use crate::config::Config;
use crate::flows::{self, FlowOutcome, OpenedFile};
use crate::interaction::{Interaction, Severity};
use crate::session::{Connection, Session};
use crate::tree::{TreeExplorer, TreeNode};

pub struct Commands {
    session: Arc<Session>,
    tree: Arc<TreeExplorer>,
    interaction: Arc<dyn Interaction>,
    workspace_root: Option<PathBuf>,
}

impl Commands {
    pub fn new(
        session: Arc<Session>,
        tree: Arc<TreeExplorer>,
        interaction: Arc<dyn Interaction>,
        workspace_root: Option<PathBuf>,
    ) -> Self {
        Self {
            session,
            tree,
            interaction,
            workspace_root,
        }
    }

    /// Establish the connection, prompting for whatever the configuration
    /// does not provide. URL and token are required; the remote path
    /// defaults to the server root.
    pub async fn connect(&self, config: &Config) {
        let url = match configured(&config.server_url) {
            Some(url) => Some(url),
            None => self.interaction.prompt("Enter Jupyter Server URL").await,
        };
        let token = match configured(&config.token) {
            Some(token) => Some(token),
            None => self.interaction.prompt_secret("Enter Jupyter Token").await,
        };
        let remote_root = match configured(&config.remote_path) {
            Some(path) => Some(path),
            None => {
                self.interaction
                    .prompt("Enter Remote Path (leave empty for root)")
                    .await
            }
        };

        let (Some(server_url), Some(token)) = (url, token) else {
            self.interaction
                .notify(Severity::Error, "Jupyter Server URL and Token are required.");
            return;
        };
        if server_url.is_empty() || token.is_empty() {
            self.interaction
                .notify(Severity::Error, "Jupyter Server URL and Token are required.");
            return;
        }

        let connection = Connection {
            server_url,
            token,
            remote_root: remote_root.filter(|p| !p.is_empty()).unwrap_or_else(|| "/".into()),
        };
        match self.session.set_connection(connection) {
            Ok(()) => {
                self.interaction
                    .notify(Severity::Info, "Connected to Jupyter Server.");
                self.tree.refresh();
            }
            Err(e) => {
                error!("connect failed: {e}");
                self.interaction
                    .notify(Severity::Error, &format!("Failed to connect: {e}"));
            }
        }
    }

    /// Re-query the whole tree.
    pub fn refresh(&self) {
        self.tree.refresh();
    }

    /// Download a remote file into the workspace. Returns the scratch file
    /// for the host to open and tag, or `None` if the flow did not finish.
    pub async fn open_file(&self, node: &TreeNode) -> Option<OpenedFile> {
        let Some(workspace_root) = self.workspace_root.as_deref() else {
            self.interaction.notify(
                Severity::Error,
                "Workspace folder is undefined. Please set your workspace",
            );
            return None;
        };

        match flows::open_file(&self.session, self.interaction.as_ref(), workspace_root, &node.path)
            .await
        {
            Ok(FlowOutcome::Completed(opened)) => Some(opened),
            Ok(FlowOutcome::Cancelled) => None,
            Err(e) => {
                self.interaction
                    .notify(Severity::Error, &format!("Failed to open file. Error: {e}"));
                None
            }
        }
    }

    /// Delete a remote file. Exactly one refresh on success, none on
    /// cancellation or failure.
    pub async fn delete_file(&self, node: &TreeNode) {
        match flows::delete_file(&self.session, self.interaction.as_ref(), &node.path).await {
            Ok(FlowOutcome::Completed(())) => self.tree.refresh(),
            Ok(FlowOutcome::Cancelled) => {}
            Err(e) => {
                self.interaction.notify(
                    Severity::Error,
                    &format!("Failed to delete file from Jupyter Server. Error: {e}"),
                );
            }
        }
    }

    /// Read a local file and push it to the remote, refreshing the tree on
    /// success so the new file shows up.
    pub async fn send_to_remote(&self, local_path: &Path) {
        self.interaction.notify(
            Severity::Info,
            &format!("Sending file: {}", local_path.display()),
        );

        let content = match std::fs::read_to_string(local_path) {
            Ok(content) => content,
            Err(e) => {
                self.interaction
                    .notify(Severity::Error, &format!("Failed to read file: {e}"));
                return;
            }
        };

        let local = local_path.to_string_lossy();
        match flows::save_back(&self.session, self.interaction.as_ref(), &local, &content).await {
            Ok(FlowOutcome::Completed(())) => self.tree.refresh(),
            Ok(FlowOutcome::Cancelled) => {}
            Err(e) => {
                self.interaction.notify(
                    Severity::Error,
                    &format!("Failed to save file to Jupyter Server. Error: {e}"),
                );
            }
        }
    }
}

fn configured(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}
