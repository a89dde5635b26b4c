// Decides whether a link clicked inside a bookmark excerpt leaves the site.

use url::Url;

use crate::types::settings::LinkSettings;

/// External-link policy for excerpt links.
pub struct LinkPolicy {
    enabled: bool,
    base: Option<Url>,
}

impl LinkPolicy {
    pub fn new(settings: &LinkSettings) -> Self {
        let base = match Url::parse(&settings.base_url) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("invalid base url {:?}: {}", settings.base_url, e);
                None
            }
        };
        Self {
            enabled: settings.external_links_in_new_tab,
            base,
        }
    }

    /// True for absolute http(s) links to another host, when the user opted in.
    ///
    /// Relative links resolve against the base and therefore never qualify.
    pub fn should_open_in_new_tab(&self, href: &str) -> bool {
        if !self.enabled {
            return false;
        }
        let link = match Url::parse(href) {
            Ok(url) => url,
            Err(_) => return false,
        };
        if !matches!(link.scheme(), "http" | "https") {
            return false;
        }
        match &self.base {
            Some(base) => link.host_str() != base.host_str(),
            None => true,
        }
    }
}
