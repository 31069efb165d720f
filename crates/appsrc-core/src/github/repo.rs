//! Repository objects returned by the org listing endpoint.

use serde::Deserialize;

use super::PageError;

/// The fields of a repository object we act on. Other fields are ignored;
/// these three are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repo {
    pub clone_url: String,
    pub archived: bool,
    pub disabled: bool,
}

impl Repo {
    /// Archived and disabled repositories are not app sources.
    pub fn is_active(&self) -> bool {
        !self.archived && !self.disabled
    }
}

/// Decode one page body (a JSON array of repository objects).
pub fn parse_page(body: &[u8]) -> Result<Vec<Repo>, PageError> {
    Ok(serde_json::from_slice(body)?)
}
