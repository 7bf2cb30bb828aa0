//! jupyter-explorer: browse, open, save, and delete files hosted on a
//! remote Jupyter server, from an editor host.
//!
//! The flows in this crate are host-agnostic: every user-facing dialog goes
//! through the [`Interaction`] port, the tree contract lives in [`tree`],
//! and the virtual-filesystem contract in [`remote_fs`]. A small terminal
//! host binary drives the same command surface interactively.

pub mod commands;
pub mod config;
pub mod flows;
pub mod interaction;
pub mod language;
pub mod remote_fs;
pub mod session;
pub mod tree;

pub use commands::Commands;
pub use config::Config;
pub use flows::{FlowError, FlowOutcome, OpenedFile};
pub use interaction::{Interaction, Severity};
pub use remote_fs::{FileChangeEvent, FileStat, FsError, RemoteFs, WriteOptions};
pub use session::{Connection, Session};
pub use tree::{TreeExplorer, TreeItem, TreeNode};
