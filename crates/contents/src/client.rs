//! HTTP client for the Contents API.
//!
//! One reusable `reqwest::Client` per connection, every request prefixed
//! with the server URL and carrying `Authorization: token <token>`.
//! No retries, no caching: each call is a single attempt.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, Response};
use serde_json::json;
use tracing::debug;

use crate::error::ContentsError;
use crate::model::{ContentsResponse, FileContent, RemoteEntry, WireEntry};

/// Authenticated handle to one Jupyter server.
#[derive(Debug)]
pub struct ContentsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentsClient {
    /// Build a client for `server_url`, attaching `token` to every request.
    pub fn new(server_url: &str, token: &str) -> Result<Self, ContentsError> {
        let mut headers = HeaderMap::new();
        let mut auth =
            HeaderValue::from_str(&format!("token {token}")).map_err(|_| ContentsError::Api {
                method: "CONNECT",
                url: server_url.to_string(),
                status: 0,
                body: "token contains characters not valid in a header".to_string(),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(ContentsError::Build)?;

        Ok(Self {
            http,
            base_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for a remote path.
    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/contents/{path}", self.base_url)
    }

    /// List a directory, mapping each listed entry.
    pub async fn list(&self, path: &str) -> Result<Vec<RemoteEntry>, ContentsError> {
        let url = self.url(path);
        let response = self.send(Method::GET, &url, None).await?;
        let body: ContentsResponse = Self::parse_json(&url, response).await?;

        let Some(serde_json::Value::Array(items)) = body.content else {
            return Err(ContentsError::Malformed {
                url,
                reason: format!("expected a directory listing, got type \"{}\"", body.kind),
            });
        };

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let wire: WireEntry =
                serde_json::from_value(item).map_err(|e| ContentsError::Malformed {
                    url: url.clone(),
                    reason: format!("bad listing entry: {e}"),
                })?;
            entries.push(RemoteEntry::from(wire));
        }
        debug!(path, count = entries.len(), "listed remote directory");
        Ok(entries)
    }

    /// Fetch a file's content.
    pub async fn get_content(&self, path: &str) -> Result<FileContent, ContentsError> {
        let url = self.url(path);
        let response = self.send(Method::GET, &url, None).await?;
        let body: ContentsResponse = Self::parse_json(&url, response).await?;

        match body.content {
            Some(value) => Ok(FileContent::from_value(value)),
            None => Err(ContentsError::Malformed {
                url,
                reason: "response carried no content field".to_string(),
            }),
        }
    }

    /// Write text content to a remote path, creating or overwriting it.
    pub async fn put(&self, path: &str, content: &str) -> Result<(), ContentsError> {
        let url = self.url(path);
        let body = json!({
            "content": content,
            "type": "file",
            "format": "text",
        });
        self.send(Method::PUT, &url, Some(body)).await?;
        debug!(path, bytes = content.len(), "saved file to remote");
        Ok(())
    }

    /// Delete a remote path.
    pub async fn delete(&self, path: &str) -> Result<(), ContentsError> {
        let url = self.url(path);
        self.send(Method::DELETE, &url, None).await?;
        debug!(path, "deleted remote file");
        Ok(())
    }

    /// Issue one request and turn any non-2xx answer into a descriptive
    /// error carrying the server's status and body.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ContentsError> {
        let method_name = method_name(&method);
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|source| {
            ContentsError::Transport {
                method: method_name,
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ContentsError::Api {
            method: method_name,
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn parse_json(
        url: &str,
        response: Response,
    ) -> Result<ContentsResponse, ContentsError> {
        response
            .json()
            .await
            .map_err(|e| ContentsError::Malformed {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

fn method_name(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        _ => "REQUEST",
    }
}
