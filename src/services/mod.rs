// Bookmark list services
// Services perform mutations, broadcast changes, load settings and talk to the store.

pub mod collaborators;
#[cfg(feature = "network")]
pub mod http_store;
pub mod link_policy;
pub mod mutation_service;
pub mod notification_bus;
pub mod settings_engine;
