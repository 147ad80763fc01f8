//! Blocking client for the JSONPlaceholder-style users/posts/comments/todos API.
//!
//! # Overview
//! `ApiClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `PlaceholderClient` executes them through a
//! `Transport` (`ureq` by default), reports mutating calls to an `Observer`,
//! and runs the "comments on the user's last post" pipeline that writes its
//! result to disk.
//!
//! # Design
//! - Clients are stateless apart from read-only configuration.
//! - Every operation returns `Result<_, ApiError>`; the first failure aborts it.
//! - The JSON codec is an explicit value owned by the client.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod facade;
pub mod http;
pub mod observer;
pub mod pipeline;
pub mod types;

pub use client::ApiClient;
pub use codec::JsonCodec;
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind};
pub use facade::PlaceholderClient;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use observer::{Observer, RecordingObserver, Report, TracingObserver};
pub use types::{Address, Comment, Company, Geo, Post, Todo, User};
