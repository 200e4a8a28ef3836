//! Backend API
//!
//! HTTP bindings to the hostel backend, organized by audience.

mod client;
mod error;
mod transport;
mod student;
mod admin;
mod chat;

#[cfg(test)]
pub mod testing;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, CONNECTIVITY_MESSAGE};
pub use transport::{Method, Transport};
