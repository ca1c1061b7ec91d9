//! BookAI service library.
//!
//! Exposes the configuration, HTTP handlers, provider layer and startup
//! plumbing so integration tests can drive the router directly.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod services;
pub mod startup;
