//! Organization repository listing.
//!
//! Pages through `/orgs/{org}/repos` one request at a time until an empty
//! page. The first failed page is logged and ends the listing; whatever was
//! collected before it is kept.

mod client;
mod error;
mod repo;

pub use client::GithubClient;
pub use error::PageError;
pub use repo::{parse_page, Repo};

/// Anything that can return one page of an org's repositories.
///
/// Pages are 1-based. `GithubClient` is the real implementation; tests
/// substitute scripted sources.
pub trait PageSource {
    fn fetch_page(&self, org: &str, page: u32) -> Result<Vec<Repo>, PageError>;
}

/// Returns the clone URLs of every active (not archived, not disabled) repository of `org`.
pub fn list_org_repos<S: PageSource + ?Sized>(source: &S, org: &str) -> Vec<String> {
    let mut urls = Vec::new();
    let mut page = 1u32;

    loop {
        match source.fetch_page(org, page) {
            Ok(repos) if repos.is_empty() => break,
            Ok(repos) => {
                let total = repos.len();
                let before = urls.len();
                urls.extend(
                    repos
                        .into_iter()
                        .filter(Repo::is_active)
                        .map(|r| r.clone_url),
                );
                tracing::debug!(
                    "org {} page {}: {} repos, {} active",
                    org,
                    page,
                    total,
                    urls.len() - before
                );
                page += 1;
            }
            Err(e) => {
                tracing::warn!(
                    "error fetching repos from org {} (page {}): {}",
                    org,
                    page,
                    e
                );
                break;
            }
        }
    }

    tracing::info!("org {}: {} active repositories", org, urls.len());
    urls
}
