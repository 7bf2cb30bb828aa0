//! The open, save-back, and delete flows.
//!
//! Each flow is one sequential pass: resolve, confirm with the user,
//! perform the remote call. Declining a confirmation cancels the flow
//! before any network traffic and leaves no side effects.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use jupyter_explorer_contents::ContentsError;

use crate::interaction::{Interaction, Severity};
use crate::language::language_id;
use crate::session::Session;

/// Failures a flow can hit; cancellation is an outcome, not an error.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Remote(#[from] ContentsError),

    #[error("failed to render remote content: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a flow ended. `Cancelled` means the user declined a confirmation;
/// the flow performed no remote call and changed nothing.
#[derive(Debug, PartialEq, Eq)]
pub enum FlowOutcome<T = ()> {
    Completed(T),
    Cancelled,
}

impl<T> FlowOutcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Local scratch copy produced by the open flow, with the language tag the
/// host should apply when opening it.
#[derive(Debug, PartialEq, Eq)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub language: &'static str,
}

/// Download a remote file into `workspace_root` and hand it to the host.
///
/// An existing local file with the same name requires explicit
/// confirmation before being overwritten; the confirmation happens before
/// the fetch, so declining issues no request at all.
pub async fn open_file(
    session: &Session,
    interaction: &dyn Interaction,
    workspace_root: &Path,
    remote_path: &str,
) -> Result<FlowOutcome<OpenedFile>, FlowError> {
    let client = session.client()?;

    let file_name = remote_file_name(remote_path);
    let destination = workspace_root.join(file_name);

    if destination.exists() {
        let message = format!(
            "File {} already exists. Do you want to overwrite it?",
            destination.display()
        );
        if !interaction.confirm(&message).await {
            interaction.notify(Severity::Info, "File open operation cancelled.");
            return Ok(FlowOutcome::Cancelled);
        }
    }

    let content = client.get_content(remote_path).await?;
    let text = content.to_text()?;
    std::fs::write(&destination, text).map_err(|source| FlowError::LocalIo {
        path: destination.clone(),
        source,
    })?;

    info!(remote_path, local = %destination.display(), "downloaded remote file");
    interaction.notify(
        Severity::Info,
        &format!("Download completed in {}", destination.display()),
    );

    Ok(FlowOutcome::Completed(OpenedFile {
        language: language_id(file_name),
        path: destination,
    }))
}

/// Push local content back to the server.
///
/// The destination is the last listed directory (or the remote root when
/// nothing was listed yet) plus the local file's base name. The user sees
/// both paths before anything is sent.
pub async fn save_back(
    session: &Session,
    interaction: &dyn Interaction,
    local_path: &str,
    content: &str,
) -> Result<FlowOutcome, FlowError> {
    let client = session.client()?;
    let remote_path = resolve_remote_destination(&session.save_base(), local_path);

    let message = format!(
        "Are you sure you want to save the file?\nLocal Path: {local_path}\nRemote Path: {remote_path}"
    );
    if !interaction.confirm(&message).await {
        interaction.notify(Severity::Info, "File save operation cancelled.");
        return Ok(FlowOutcome::Cancelled);
    }

    client.put(&remote_path, content).await?;
    interaction.notify(
        Severity::Info,
        &format!("File saved to Jupyter Server. Path: {remote_path}"),
    );
    Ok(FlowOutcome::Completed(()))
}

/// Delete a remote file after explicit confirmation.
pub async fn delete_file(
    session: &Session,
    interaction: &dyn Interaction,
    remote_path: &str,
) -> Result<FlowOutcome, FlowError> {
    let client = session.client()?;

    let message = format!("Are you sure you want to delete the file {remote_path}?");
    if !interaction.confirm(&message).await {
        interaction.notify(Severity::Info, "File delete operation cancelled.");
        return Ok(FlowOutcome::Cancelled);
    }

    client.delete(remote_path).await?;
    interaction.notify(
        Severity::Info,
        &format!("File {remote_path} deleted successfully."),
    );
    Ok(FlowOutcome::Completed(()))
}

/// Remote destination for save-back: `<base>/<base name of local_path>`,
/// with Windows separators normalized to `/`.
pub fn resolve_remote_destination(base: &str, local_path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), local_file_name(local_path))
}

/// Final segment of a local path, treating `\` and `/` both as separators.
fn local_file_name(local_path: &str) -> String {
    let normalized = local_path.replace('\\', "/");
    normalized
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Final segment of a remote path, defaulting to "untitled".
fn remote_file_name(remote_path: &str) -> &str {
    match remote_path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "untitled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_local_path_resolves_under_listed_directory() {
        assert_eq!(
            resolve_remote_destination("/a/b", "C:\\x\\report.ipynb"),
            "/a/b/report.ipynb"
        );
    }

    #[test]
    fn unix_local_path_resolves_the_same_way() {
        assert_eq!(
            resolve_remote_destination("work", "/home/me/notes.txt"),
            "work/notes.txt"
        );
    }

    #[test]
    fn trailing_slash_on_base_does_not_double() {
        assert_eq!(
            resolve_remote_destination("work/", "a.py"),
            "work/a.py"
        );
        assert_eq!(resolve_remote_destination("/", "a.py"), "/a.py");
    }

    #[test]
    fn remote_file_name_defaults_to_untitled() {
        assert_eq!(remote_file_name("work/train.py"), "train.py");
        assert_eq!(remote_file_name(""), "untitled");
        assert_eq!(remote_file_name("work/"), "untitled");
    }
}
