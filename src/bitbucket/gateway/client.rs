//! Blocking HTTP implementation of the Bitbucket gateways.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::bitbucket::error::BbError;
use crate::bitbucket::identity::RepositoryIdentity;
use crate::bitbucket::transport::Credentials;

use super::models::{CreateRepositoryOptions, Page, RepositoryEntry, UserEntry};
use super::{FollowerGateway, ForkGateway, RepositoryAdminGateway};

/// Default base URL of the JSON API.
pub const DEFAULT_API_URL: &str = "https://api.bitbucket.org/2.0";

const DEFAULT_TIMEOUT_SECS: u64 = 20;
const ERROR_BODY_LIMIT: usize = 160;
const MAX_PAGES: usize = 100;

/// Gateway that talks to the JSON API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBitbucketGateway {
    client: Client,
    api_base: String,
    credentials: Option<Credentials>,
}

impl HttpBitbucketGateway {
    /// Creates a gateway for `api_base`, authenticating with `credentials`
    /// when they include a password.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(
        api_base: impl Into<String>,
        credentials: Option<Credentials>,
    ) -> Result<Self, BbError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("bbshort/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| BbError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_owned(),
            credentials,
        })
    }

    fn repository_endpoint(&self, identity: &RepositoryIdentity, suffix: &str) -> String {
        format!(
            "{}/repositories/{}/{}{suffix}",
            self.api_base,
            identity.owner(),
            identity.name()
        )
    }

    fn authenticated(&self, request: RequestBuilder) -> Result<RequestBuilder, BbError> {
        let credentials = self
            .credentials
            .as_ref()
            .filter(|credentials| credentials.password().is_some())
            .ok_or_else(|| BbError::Configuration {
                message: "a password is required (set bb.password)".to_owned(),
            })?;
        Ok(request.basic_auth(credentials.username(), credentials.password()))
    }

    /// Performs one API call and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::Network`] when the request cannot be sent,
    /// [`BbError::HttpStatusFailure`] for non-success statuses and
    /// [`BbError::Configuration`] when credentials are required but missing.
    pub fn remote_api_call(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
        use_credentials: bool,
    ) -> Result<Vec<u8>, BbError> {
        debug!(endpoint, post = payload.is_some(), "calling Bitbucket API");

        let mut request = match payload {
            Some(body) => self.client.post(endpoint).json(body),
            None => self.client.get(endpoint),
        };
        if use_credentials {
            request = self.authenticated(request)?;
        }

        let response = request.send().map_err(|error| BbError::Network {
            message: error.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(&content, ERROR_BODY_LIMIT),
            );
            return Err(BbError::HttpStatusFailure {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|error| BbError::Network {
                message: error.to_string(),
            })
    }

    /// Collects `values` from every page, following `next` links.
    ///
    /// A `next` link must stay under the API base and may not repeat a page
    /// already fetched.
    fn list_all<T: DeserializeOwned>(&self, first_page: String) -> Result<Vec<T>, BbError> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(first_page);

        while let Some(endpoint) = next {
            if visited.len() >= MAX_PAGES {
                return Err(BbError::ScrapeFailure {
                    message: format!("more than {MAX_PAGES} result pages"),
                });
            }
            if !visited.insert(endpoint.clone()) {
                return Err(BbError::ScrapeFailure {
                    message: format!("page {endpoint} was already fetched"),
                });
            }

            let body = self.remote_api_call(&endpoint, None, self.has_password())?;
            let page: Page<T> =
                serde_json::from_slice(&body).map_err(|error| BbError::ScrapeFailure {
                    message: format!("unexpected response from {endpoint}: {error}"),
                })?;
            let values = page.values.ok_or_else(|| BbError::ScrapeFailure {
                message: format!("response from {endpoint} has no values"),
            })?;
            items.extend(values);
            next = page.next.map(|link| self.checked_next(link)).transpose()?;
        }

        Ok(items)
    }

    fn checked_next(&self, link: String) -> Result<String, BbError> {
        let within_api = link
            .strip_prefix(self.api_base.as_str())
            .is_some_and(|rest| rest.starts_with('/'));
        if within_api {
            Ok(link)
        } else {
            Err(BbError::ScrapeFailure {
                message: format!("next page {link} is outside {}", self.api_base),
            })
        }
    }

    fn has_password(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(|credentials| credentials.password().is_some())
    }
}

impl ForkGateway for HttpBitbucketGateway {
    fn list_forks(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<Vec<RepositoryIdentity>, BbError> {
        info!(%identity, "getting fork list");
        let entries: Vec<RepositoryEntry> =
            self.list_all(self.repository_endpoint(identity, "/forks"))?;

        entries
            .into_iter()
            .map(|entry| {
                RepositoryIdentity::parse(&entry.full_name).map_err(|_| BbError::ScrapeFailure {
                    message: format!("fork has malformed name '{}'", entry.full_name),
                })
            })
            .collect()
    }
}

impl FollowerGateway for HttpBitbucketGateway {
    fn list_followers(&self, identity: &RepositoryIdentity) -> Result<Vec<String>, BbError> {
        info!(%identity, "getting follower list");
        let entries: Vec<UserEntry> =
            self.list_all(self.repository_endpoint(identity, "/watchers"))?;

        Ok(entries.into_iter().filter_map(UserEntry::into_name).collect())
    }
}

impl RepositoryAdminGateway for HttpBitbucketGateway {
    fn create_repository(
        &self,
        identity: &RepositoryIdentity,
        options: &CreateRepositoryOptions,
    ) -> Result<(), BbError> {
        info!(%identity, private = options.is_private, "creating repository");
        let payload = serde_json::to_value(options).map_err(|error| BbError::Configuration {
            message: format!("failed to encode repository options: {error}"),
        })?;

        self.remote_api_call(&self.repository_endpoint(identity, ""), Some(&payload), true)
            .map(|_| ())
    }
}

fn truncate_for_message(content: &str, limit: usize) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= limit {
        return trimmed.to_owned();
    }
    let truncated: String = trimmed.chars().take(limit).collect();
    format!("{truncated}...")
}
