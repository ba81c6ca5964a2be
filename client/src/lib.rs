//! Training Diary API Client
//!
//! A thin typed client for the Training Diary REST API plus an observable
//! auth state store for UI layers.
//!
//! ## Architecture
//!
//! - Config: base URL and environment layering
//! - Api: outbound HTTP, bearer auth, JSON (de)serialization
//! - Auth: observable "current user" cell synchronized via the API client

pub mod api;
pub mod auth;
pub mod config;
pub mod error;

pub use api::ApiClient;
pub use auth::{AuthStore, Observable, Subscription};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
