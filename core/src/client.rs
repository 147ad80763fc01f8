//! Stateless HTTP request builder and response parser for the placeholder API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and a codec and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and, where the response is decoded, a `parse_*`
//! method that consumes an `HttpResponse`. `PlaceholderClient` runs the
//! round-trip in between; keeping this half I/O free makes it deterministic.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::codec::JsonCodec;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, APPLICATION_JSON_UTF8, CONTENT_TYPE};
use crate::types::{Comment, Post, Todo, User};

/// Characters escaped in a path segment, `/` and `%` included so an id can
/// never split into several segments.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode `id` as exactly one URL path segment.
pub fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Synchronous, stateless request builder / response parser.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    codec: JsonCodec,
}

impl ApiClient {
    pub fn new(base_url: &str, codec: JsonCodec) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            codec,
        }
    }

    pub fn codec(&self) -> &JsonCodec {
        &self.codec
    }

    pub fn build_list_users(&self) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{}/users", self.base_url))
    }

    pub fn build_get_user(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, self.user_url(id, ""))
    }

    pub fn build_find_user(&self, username: &str) -> HttpRequest {
        let mut req = self.build_list_users();
        req.query.push(("username".to_string(), username.to_string()));
        req
    }

    pub fn build_create_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        let mut req = self.request(HttpMethod::Post, format!("{}/users", self.base_url));
        req.body = Some(self.codec.encode(user)?);
        Ok(req)
    }

    pub fn build_update_user(&self, id: &str, user: &User) -> Result<HttpRequest, ApiError> {
        let mut req = self.request(HttpMethod::Put, self.user_url(id, ""));
        req.body = Some(self.codec.encode(user)?);
        Ok(req)
    }

    pub fn build_delete_user(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, self.user_url(id, ""))
    }

    pub fn build_user_todos(&self, user_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, self.user_url(user_id, "/todos"))
    }

    pub fn build_user_posts(&self, user_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, self.user_url(user_id, "/posts"))
    }

    pub fn build_post_comments(&self, post_id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{}/posts/{post_id}/comments", self.base_url))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        self.decode(response)
    }

    /// Decode a user's todos and keep the ones not yet completed, in the
    /// order the server sent them.
    pub fn parse_open_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        let todos: Vec<Todo> = self.decode(response)?;
        Ok(todos.into_iter().filter(|todo| !todo.completed).collect())
    }

    pub fn parse_user_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        self.decode(response)
    }

    pub fn parse_post_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        self.decode(response)
    }

    fn user_url(&self, id: &str, suffix: &str) -> String {
        format!("{}/users/{}{suffix}", self.base_url, path_segment(id))
    }

    fn request(&self, method: HttpMethod, url: String) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON_UTF8.to_string())],
            query: Vec::new(),
            body: None,
        }
    }

    fn decode<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        self.codec.decode(&response.body)
    }
}

/// Map non-2xx status codes to `ApiError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
