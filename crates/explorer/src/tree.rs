//! Tree data source for the remote file explorer view.
//!
//! Answers "what are the children of this node" by listing the Contents
//! API and mapping each entry to a node. Listing failures are reported to
//! the user and degrade to an empty child set so the view stays alive.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use jupyter_explorer_contents::RemoteEntry;

use crate::interaction::{Interaction, Severity};
use crate::session::Session;

/// One node of the remote tree, keyed by its remote path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub path: String,
    pub is_directory: bool,
}

impl TreeNode {
    pub fn directory(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            label: path.clone(),
            path,
            is_directory: true,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            label: path.clone(),
            path,
            is_directory: false,
        }
    }
}

impl From<RemoteEntry> for TreeNode {
    fn from(entry: RemoteEntry) -> Self {
        Self {
            label: entry.name,
            path: entry.path,
            is_directory: entry.is_directory,
        }
    }
}

/// Displayable item handed to the host's tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub label: String,
    pub tooltip: String,
    pub description: String,
    pub collapsible: bool,
    /// Context key the host uses to enable per-item actions.
    pub context_value: Option<&'static str>,
}

/// The tree data source.
///
/// Holds a refresh generation on a watch channel; bumping it invalidates
/// the whole visible tree so every expanded node re-queries on next
/// render.
pub struct TreeExplorer {
    session: Arc<Session>,
    interaction: Arc<dyn Interaction>,
    generation: watch::Sender<u64>,
}

impl TreeExplorer {
    pub fn new(session: Arc<Session>, interaction: Arc<dyn Interaction>) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            session,
            interaction,
            generation,
        }
    }

    /// Children of `node`, or of the remote root when `node` is `None`.
    ///
    /// Never fails: a disconnected session or a listing error notifies the
    /// user and returns no children. A successful listing records its path
    /// as the session's current directory.
    pub async fn get_children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        let client = match self.session.client() {
            Ok(client) => client,
            Err(e) => {
                self.interaction.notify(Severity::Error, &e.to_string());
                return Vec::new();
            }
        };

        let path = node.map_or_else(|| self.session.remote_root(), |n| n.path.clone());
        match client.list(&path).await {
            Ok(entries) => {
                self.session.set_current_dir(&path);
                entries.into_iter().map(TreeNode::from).collect()
            }
            Err(e) => {
                self.interaction.notify(
                    Severity::Error,
                    &format!("Failed to fetch file list from Jupyter Server. {e}"),
                );
                Vec::new()
            }
        }
    }

    /// Displayable item for a node. Files carry a context value so the
    /// host can attach open/delete actions to them.
    pub fn get_tree_item(&self, node: &TreeNode) -> TreeItem {
        TreeItem {
            label: node.label.clone(),
            tooltip: node.label.clone(),
            description: node.path.clone(),
            collapsible: node.is_directory,
            context_value: (!node.is_directory).then_some("remoteFile"),
        }
    }

    /// Invalidate the entire visible tree.
    pub fn refresh(&self) {
        self.generation.send_modify(|g| *g += 1);
        debug!(generation = *self.generation.borrow(), "tree refreshed");
    }

    /// Change-notification event: receivers wake whenever `refresh` runs.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }

    /// Current refresh generation.
    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }
}
