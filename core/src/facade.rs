//! One method per remote operation, plus the last-post-comments pipeline.
//!
//! # Design
//! `PlaceholderClient` glues the request builders of `ApiClient`, a
//! `Transport`, and an `Observer` together. Every call runs its requests
//! sequentially and the first failure aborts it. Nothing is cached between
//! calls.

use std::fs;
use std::path::{Path, PathBuf};

use crate::client::ApiClient;
use crate::codec::JsonCodec;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::observer::{Observer, TracingObserver};
use crate::pipeline::{comments_file_path, is_file_name_safe, latest_post};
use crate::types::{Comment, Post, Todo, User};

/// Blocking client for the placeholder API.
#[derive(Debug, Clone)]
pub struct PlaceholderClient<T = UreqTransport, O = TracingObserver> {
    api: ApiClient,
    output_dir: PathBuf,
    transport: T,
    observer: O,
}

impl PlaceholderClient {
    /// Client using `ureq` for transport and `tracing` for reports.
    pub fn new(config: ClientConfig) -> Self {
        Self::from_parts(config, JsonCodec::default(), UreqTransport::new(), TracingObserver)
    }
}

impl<T: Transport, O: Observer> PlaceholderClient<T, O> {
    pub fn from_parts(config: ClientConfig, codec: JsonCodec, transport: T, observer: O) -> Self {
        Self {
            api: ApiClient::new(&config.base_url, codec),
            output_dir: config.output_dir,
            transport,
            observer,
        }
    }

    /// `POST /users`. The response is only reported, never returned.
    pub fn create_user(&self, user: &User) -> Result<(), ApiError> {
        let req = self.api.build_create_user(user)?;
        self.send_and_report("create_user", &req)?;
        Ok(())
    }

    /// `PUT /users/{id}`. The response is only reported, never returned.
    pub fn update_user(&self, user: &User, id: &str) -> Result<(), ApiError> {
        let req = self.api.build_update_user(id, user)?;
        self.send_and_report("update_user", &req)?;
        Ok(())
    }

    /// `DELETE /users/{id}`. The response is only reported, never returned.
    pub fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let req = self.api.build_delete_user(id);
        self.send_and_report("delete_user", &req)?;
        Ok(())
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.transport.execute(&self.api.build_list_users())?;
        self.api.parse_list_users(response)
    }

    /// Raw body of `GET /users/{id}`, whatever the status.
    pub fn user_by_id(&self, id: &str) -> Result<String, ApiError> {
        let response = self.send_and_report("user_by_id", &self.api.build_get_user(id))?;
        Ok(response.body)
    }

    /// Raw body of `GET /users?username=...`, whatever the status. The
    /// server answers with a (possibly empty) JSON array.
    pub fn user_by_username(&self, username: &str) -> Result<String, ApiError> {
        let response = self.send_and_report("user_by_username", &self.api.build_find_user(username))?;
        Ok(response.body)
    }

    pub fn list_open_todos(&self, user_id: &str) -> Result<Vec<Todo>, ApiError> {
        let response = self.transport.execute(&self.api.build_user_todos(user_id))?;
        self.api.parse_open_todos(response)
    }

    pub fn user_posts(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        let response = self.transport.execute(&self.api.build_user_posts(user_id))?;
        self.api.parse_user_posts(response)
    }

    pub fn post_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        let response = self.transport.execute(&self.api.build_post_comments(post_id))?;
        self.api.parse_post_comments(response)
    }

    /// Fetch the comments of the user's highest-id post and write them,
    /// pretty-printed, to `<output_dir>/user-<user_id>-post-<post_id>-comments.json`.
    ///
    /// Returns the path written. A user without posts is an
    /// `ApiError::EmptyResult`; in that case nothing else is requested and
    /// no file is touched. An id that is not a single file name component is
    /// an `ApiError::InvalidId` before any request is sent.
    pub fn last_post_comments_to_file(&self, user_id: &str) -> Result<PathBuf, ApiError> {
        if !is_file_name_safe(user_id) {
            return Err(ApiError::InvalidId {
                id: user_id.to_string(),
            });
        }

        let posts = self.user_posts(user_id)?;
        let post_id = latest_post(&posts)
            .map(|post| post.id)
            .ok_or_else(|| ApiError::EmptyResult {
                user_id: user_id.to_string(),
            })?;

        let comments = self.post_comments(post_id)?;
        let json = self.api.codec().encode_pretty(&comments)?;

        let path = comments_file_path(&self.output_dir, user_id, post_id);
        write_file(&self.output_dir, &path, &json)?;
        tracing::info!(user_id, post_id, comments = comments.len(), path = %path.display(), "wrote comments");
        Ok(path)
    }

    fn send_and_report(&self, operation: &str, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.transport.execute(req)?;
        self.observer.report(operation, response.status, &response.body);
        Ok(response)
    }
}

/// Write `path`, creating `output_dir` if needed. `path` must sit directly
/// inside `output_dir`.
fn write_file(output_dir: &Path, path: &Path, contents: &str) -> Result<(), ApiError> {
    let io_err = |source: std::io::Error| ApiError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if !output_dir.as_os_str().is_empty() {
        fs::create_dir_all(output_dir).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}
