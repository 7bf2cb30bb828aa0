//! Tests for the virtual-filesystem adapter.

mod common;

use std::sync::Arc;

use serde_json::json;

use common::{connected_session, spawn, FakeJupyter};
use jupyter_explorer::interaction::test_support::Scripted;
use jupyter_explorer::{RemoteFs, WriteOptions};

const OPTIONS: WriteOptions = WriteOptions {
    create: true,
    overwrite: true,
};

#[tokio::test]
async fn read_file_returns_content_bytes() {
    let server = Arc::new(FakeJupyter::default());
    server.insert_file("work/notes.txt", json!("remote text"));
    let url = spawn(server.clone()).await;
    let fs = RemoteFs::new(
        Arc::new(connected_session(&url, "work")),
        Arc::new(Scripted::new()),
    );

    // Leading separator of the URI path is stripped.
    let bytes = fs.read_file("/work/notes.txt").await.unwrap();
    assert_eq!(bytes, b"remote text");
}

#[tokio::test]
async fn write_file_saves_and_emits_a_change_event() {
    let server = Arc::new(FakeJupyter::default());
    let url = spawn(server.clone()).await;
    let ui = Arc::new(Scripted::new());
    ui.answer_confirm(true);
    let fs = RemoteFs::new(Arc::new(connected_session(&url, "work")), ui);
    let mut changes = fs.subscribe();

    fs.write_file("/notes.txt", b"edited", OPTIONS).await.unwrap();

    assert_eq!(server.file("work/notes.txt"), Some(json!("edited")));
    let event = changes.try_recv().unwrap();
    assert_eq!(event.uri, "/notes.txt");
}

#[tokio::test]
async fn declined_write_is_a_no_op() {
    let server = Arc::new(FakeJupyter::default());
    let url = spawn(server.clone()).await;
    let ui = Arc::new(Scripted::new()); // declines
    let fs = RemoteFs::new(Arc::new(connected_session(&url, "work")), ui);
    let mut changes = fs.subscribe();

    fs.write_file("/notes.txt", b"edited", OPTIONS).await.unwrap();

    assert_eq!(server.total_requests(), 0);
    assert!(changes.try_recv().is_err());
}

#[tokio::test]
async fn non_utf8_write_is_invalid_data() {
    let url = spawn(Arc::new(FakeJupyter::default())).await;
    let fs = RemoteFs::new(
        Arc::new(connected_session(&url, "work")),
        Arc::new(Scripted::new()),
    );

    let err = fs
        .write_file("/bin.dat", &[0xff, 0xfe, 0x00], OPTIONS)
        .await
        .unwrap_err();
    assert!(matches!(err, jupyter_explorer::FsError::InvalidData(_)));
}
