//! Client for the Jupyter server Contents API (`api/contents/<path>`).
//!
//! This crate knows nothing about any editor host; it only speaks the wire
//! contract: list a directory, fetch a file, write a file, delete a file,
//! all authenticated with a static bearer token.

pub mod client;
pub mod error;
pub mod model;

pub use client::ContentsClient;
pub use error::ContentsError;
pub use model::{FileContent, RemoteEntry};
