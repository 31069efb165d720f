//! The discovery pipeline: org listing, then manual entries, merged into one [`AppSet`].

use crate::github::{list_org_repos, PageSource};
use crate::merge::AppSet;

/// Builds the deduplicated app set.
///
/// `org` (if present and non-blank) is listed through `source` and absorbed
/// first; `apps` is split on whitespace and absorbed second, so manual URLs
/// override org entries and manual bare names only add new apps.
pub fn discover<S: PageSource + ?Sized>(
    source: &S,
    org: Option<&str>,
    apps: Option<&str>,
) -> AppSet {
    let mut set = AppSet::new();

    if let Some(org) = org.map(str::trim).filter(|o| !o.is_empty()) {
        set.absorb_all(list_org_repos(source, org));
    }
    if let Some(apps) = apps {
        set.absorb_all(apps.split_whitespace());
    }

    tracing::debug!("discovered {} apps", set.len());
    set
}
