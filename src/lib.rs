//! Bookmark list core: bulk selection and the mutation lifecycle of a bookmark list.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod click_router;
pub mod managers;
pub mod mock;
pub mod services;
pub mod types;
