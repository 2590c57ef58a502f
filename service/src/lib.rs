//! Airport manager service core
//!
//! Flight scheduling queries, destination traffic views and crew assignment
//! on top of pluggable entity stores. Uses hexagonal (ports & adapters)
//! architecture: services in `app` depend only on the repository traits in
//! `domain::ports`; `adapters` provides the in-memory implementations.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use config::Config;
pub use error::{ErrorKind, LoadError, ServiceError, StoreError};
