//! Curl-backed client for the org repositories endpoint.
//!
//! One `Easy` handle per page, blocking in the current thread.

use anyhow::{bail, Context, Result};
use std::time::Duration;
use url::Url;

use super::repo::{parse_page, Repo};
use super::{PageError, PageSource};
use crate::config::{default_user_agent, AppsrcConfig, DEFAULT_API_BASE, MAX_PER_PAGE};
use crate::credential::Credential;

/// Media type for the v3 REST API.
const ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct GithubClient {
    api_base: Url,
    credential: Option<Credential>,
    per_page: u32,
    timeout: Option<Duration>,
    user_agent: String,
}

impl GithubClient {
    /// Client for `api_base` (e.g. `https://api.github.com`) with default paging and no timeout.
    pub fn new(api_base: &str, credential: Option<Credential>) -> Result<Self> {
        let api_base =
            Url::parse(api_base).with_context(|| format!("invalid API base URL {:?}", api_base))?;
        if api_base.cannot_be_a_base() || !matches!(api_base.scheme(), "http" | "https") {
            bail!("API base URL must be http(s): {}", api_base);
        }
        Ok(Self {
            api_base,
            credential,
            per_page: MAX_PER_PAGE,
            timeout: None,
            user_agent: default_user_agent(),
        })
    }

    /// Client for the public GitHub API.
    pub fn public(credential: Option<Credential>) -> Result<Self> {
        Self::new(DEFAULT_API_BASE, credential)
    }

    pub fn from_config(cfg: &AppsrcConfig, credential: Option<Credential>) -> Result<Self> {
        let mut client = Self::new(&cfg.api_base, credential)?
            .with_per_page(cfg.effective_per_page())
            .with_user_agent(cfg.user_agent.clone());
        client.timeout = cfg.timeout_secs.map(Duration::from_secs);
        Ok(client)
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// `{api_base}/orgs/{org}/repos?page={page}&per_page={per_page}`, with `org` escaped as one segment.
    pub fn page_url(&self, org: &str, page: u32) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["orgs", org, "repos"]);
        }
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &self.per_page.to_string());
        url
    }

    /// Performs a GET and returns the body of a 2xx response.
    fn get(&self, url: &Url) -> Result<Vec<u8>, PageError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        easy.useragent(&self.user_agent)?;
        if let Some(timeout) = self.timeout {
            easy.connect_timeout(timeout)?;
            easy.timeout(timeout)?;
        }

        let mut list = curl::easy::List::new();
        list.append(&format!("Accept: {}", ACCEPT))?;
        if let Some(credential) = &self.credential {
            list.append(&format!("Authorization: {}", credential.header_value()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(PageError::Status { code });
        }
        Ok(body)
    }
}

impl PageSource for GithubClient {
    fn fetch_page(&self, org: &str, page: u32) -> Result<Vec<Repo>, PageError> {
        let url = self.page_url(org, page);
        tracing::debug!("GET {}", url);
        let body = self.get(&url)?;
        parse_page(&body)
    }
}
