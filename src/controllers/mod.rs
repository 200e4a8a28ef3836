//! Page Controllers
//!
//! UI-independent flows behind each page. Components call these and render
//! the returned view state.

pub mod admin;
pub mod chat;
pub mod portal;
