use serde::{Deserialize, Serialize};

/// Largest accepted `notification_capacity`.
pub const MAX_NOTIFICATION_CAPACITY: usize = 4096;

/// Top-level configuration for a bookmark list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListSettings {
    /// Prompt shown before deleting a bookmark that has a reminder.
    pub confirm_delete_message: String,
    pub capabilities: Capabilities,
    pub links: LinkSettings,
    /// Reject a mutation on a bookmark that already has one in flight.
    pub guard_concurrent_mutations: bool,
    /// Events a slow listener may fall behind by, `1..=MAX_NOTIFICATION_CAPACITY`.
    pub notification_capacity: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            confirm_delete_message:
                "Are you sure you want to delete this bookmark? The reminder will also be deleted."
                    .to_string(),
            capabilities: Capabilities::default(),
            links: LinkSettings::default(),
            guard_concurrent_mutations: true,
            notification_capacity: 64,
        }
    }
}

/// Read-only flags describing what the acting user may do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Capabilities {
    pub can_manage_list: bool,
    pub bulk_actions_experiment_enabled: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            can_manage_list: false,
            bulk_actions_experiment_enabled: true,
        }
    }
}

/// Link handling inside bookmark excerpts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkSettings {
    pub external_links_in_new_tab: bool,
    /// Origin the list is served from; links to other hosts are external.
    pub base_url: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            external_links_in_new_tab: false,
            base_url: "http://localhost:3000".to_string(),
        }
    }
}
