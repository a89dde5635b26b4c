//! HTTP-backed [`BookmarkStore`].
//!
//! Talks to the forum's JSON endpoints:
//! - `DELETE /bookmarks/{id}.json`
//! - `PUT /bookmarks/{id}.json` with `{"reminder_at": null}`
//! - `PUT /bookmarks/{id}/toggle_pin.json`
//! - `GET /u/{username}/bookmarks.json`
//!
//! List rows identify what they are attached to by `bookmarkable_type` and
//! `bookmarkable_id`; an explicit `attached_to` object is also accepted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use crate::services::collaborators::BookmarkStore;
use crate::types::bookmark::{AttachedTo, AutoDeletePreference, Bookmark, BookmarkId};
use crate::types::errors::StoreError;

/// Bookmark store reached over HTTP.
pub struct HttpBookmarkStore {
    client: Client,
    base_url: String,
    username: String,
}

#[derive(Deserialize)]
struct BookmarkListResponse {
    user_bookmark_list: Option<BookmarkListBody>,
}

#[derive(Deserialize)]
struct BookmarkListBody {
    #[serde(default)]
    bookmarks: Vec<BookmarkRow>,
}

/// A bookmark as the list endpoint serializes it.
#[derive(Deserialize)]
struct BookmarkRow {
    id: BookmarkId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    reminder_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    auto_delete_preference: AutoDeletePreference,
    #[serde(default)]
    attached_to: Option<AttachedTo>,
    #[serde(default)]
    bookmarkable_type: Option<String>,
    #[serde(default)]
    bookmarkable_id: Option<i64>,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = StoreError;

    fn try_from(row: BookmarkRow) -> Result<Self, Self::Error> {
        let attached_to = match (row.attached_to, row.bookmarkable_type, row.bookmarkable_id) {
            (Some(attached_to), _, _) => attached_to,
            (None, Some(kind), Some(target_id)) => AttachedTo {
                target: kind.to_lowercase(),
                target_id,
            },
            _ => {
                return Err(StoreError::Malformed(format!(
                    "bookmark {} has no bookmarkable target",
                    row.id
                )))
            }
        };
        Ok(Bookmark {
            id: row.id,
            name: row.name,
            title: row.title,
            excerpt: row.excerpt,
            reminder_at: row.reminder_at,
            pinned: row.pinned,
            auto_delete_preference: row.auto_delete_preference,
            attached_to,
        })
    }
}

impl HttpBookmarkStore {
    pub fn new(base_url: &str, username: &str) -> Self {
        Self::with_client(Client::new(), base_url, username)
    }

    pub fn with_client(client: Client, base_url: &str, username: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
        }
    }

    pub fn bookmark_url(&self, id: BookmarkId) -> String {
        format!("{}/bookmarks/{}.json", self.base_url, id)
    }

    pub fn toggle_pin_url(&self, id: BookmarkId) -> String {
        format!("{}/bookmarks/{}/toggle_pin.json", self.base_url, id)
    }

    pub fn list_url(&self) -> String {
        format!("{}/u/{}/bookmarks.json", self.base_url, self.username)
    }
}

fn network_error(e: reqwest::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

/// Maps a non-2xx answer to `Rejected`.
fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Rejected {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl BookmarkStore for HttpBookmarkStore {
    async fn delete_bookmark(&self, id: BookmarkId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.bookmark_url(id))
            .send()
            .await
            .map_err(network_error)?;
        check_status(response)?;
        Ok(())
    }

    async fn clear_reminder(&self, id: BookmarkId) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.bookmark_url(id))
            .json(&json!({ "reminder_at": null }))
            .send()
            .await
            .map_err(network_error)?;
        check_status(response)?;
        Ok(())
    }

    async fn toggle_pin(&self, id: BookmarkId) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.toggle_pin_url(id))
            .send()
            .await
            .map_err(network_error)?;
        check_status(response)?;
        Ok(())
    }

    async fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError> {
        let response = self
            .client
            .get(self.list_url())
            .send()
            .await
            .map_err(network_error)?;
        let body: BookmarkListResponse = check_status(response)?
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        // An empty list comes back without the wrapper object.
        body.user_bookmark_list
            .map(|list| list.bookmarks)
            .unwrap_or_default()
            .into_iter()
            .map(Bookmark::try_from)
            .collect()
    }
}
