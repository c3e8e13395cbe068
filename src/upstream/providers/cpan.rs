//! CPAN search API provider

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};
use url::Url;

use crate::config::CpanConfig;
use crate::results::{Issue, IssueField, Release, ResultSet, Status};
use crate::upstream::error::ProviderError;
use crate::upstream::provider::{Provider, SearchOutcome};
use crate::upstream::types::ProviderType;

/// Release as listed by the CPAN distribution endpoint.
/// Missing or `null` fields decode as empty strings.
#[derive(Debug, Deserialize)]
struct CpanRelease {
    #[serde(default, deserialize_with = "nullable")]
    dist: String,
    #[serde(default, deserialize_with = "nullable")]
    archive: String,
    /// PAUSE id of the uploading author
    #[serde(default, deserialize_with = "nullable")]
    cpanid: String,
    #[serde(default, deserialize_with = "nullable")]
    version: String,
    /// RFC3339 timestamp
    #[serde(default, deserialize_with = "nullable")]
    released: String,
}

/// Response from the CPAN distribution endpoint
#[derive(Debug, Default, Deserialize)]
struct CpanReleaseSet {
    #[serde(default, deserialize_with = "nullable")]
    releases: Vec<CpanRelease>,
}

/// Treats an explicit `null` like a missing value
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes the first JSON value of `body`; anything after it is ignored.
/// A body that is `null` yields an empty release set.
fn decode_release_set(body: &[u8]) -> Result<CpanReleaseSet, serde_json::Error> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<CpanReleaseSet>>();

    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(serde::de::Error::custom("empty response body")),
    }
}

/// Provider for the CPAN search API
pub struct CpanProvider {
    client: Client,
    api_url: Url,
    archive_root: Url,
}

impl CpanProvider {
    /// Creates a provider querying `api_url` and pointing downloads at `archive_root`
    pub fn new(client: Client, api_url: Url, archive_root: Url) -> Result<Self, ProviderError> {
        if api_url.cannot_be_a_base() {
            return Err(ProviderError::InvalidBaseUrl(api_url.to_string()));
        }

        Ok(Self {
            client,
            api_url,
            archive_root,
        })
    }

    pub fn from_config(client: Client, config: &CpanConfig) -> Result<Self, ProviderError> {
        Self::new(
            client,
            config.api_url.clone(),
            config.archive_root.clone(),
        )
    }

    /// Builds the request URL with `name` escaped as a single path segment
    fn dist_url(&self, name: &str) -> Result<Url, ProviderError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProviderError::InvalidBaseUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    /// Location of an archive in the authors directory:
    /// `{root}/{id[0..1]}/{id[0..2]}/{id}/{archive}`
    ///
    /// Unlike the CPAN tooling this layout comes from, an author id shorter
    /// than two bytes is not fatal: it is returned as an error message so the
    /// caller can leave the location unset and keep the release.
    fn archive_location(&self, author: &str, archive: &str) -> Result<Url, String> {
        let (Some(bucket), Some(sub_bucket)) = (author.get(..1), author.get(..2)) else {
            return Err(format!(
                "author id '{}' cannot be split into directory buckets",
                author
            ));
        };

        let joined = url_join(&[
            self.archive_root.as_str(),
            bucket,
            sub_bucket,
            author,
            archive,
        ]);

        Url::parse(&joined).map_err(|e| format!("invalid location '{}': {}", joined, e))
    }

    /// Converts upstream records, recording unparseable fields as issues
    fn convert(&self, name: &str, release_set: CpanReleaseSet) -> ResultSet {
        let mut results = ResultSet::new(name);

        for (index, record) in release_set.releases.into_iter().enumerate() {
            let mut release = Release::new(record.dist, record.version);

            match parse_released(&record.released) {
                Ok(published) => release.published = Some(published),
                Err(e) => {
                    warn!(
                        "Failed to parse release time '{}' of {} {}: {}",
                        record.released, release.name, release.version, e
                    );
                    results.add_issue(Issue {
                        index,
                        field: IssueField::Published,
                        message: format!("invalid release time '{}': {}", record.released, e),
                    });
                }
            }

            match self.archive_location(&record.cpanid, &record.archive) {
                Ok(location) => release.location = Some(location),
                Err(message) => {
                    warn!(
                        "Failed to build download location of {} {}: {}",
                        release.name, release.version, message
                    );
                    results.add_issue(Issue {
                        index,
                        field: IssueField::Location,
                        message,
                    });
                }
            }

            results.add_result(release);
        }

        results
    }
}

fn parse_released(released: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(released).map(|time| time.with_timezone(&Utc))
}

/// Joins URL fragments with exactly one slash between them
fn url_join(parts: &[&str]) -> String {
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.trim_end_matches('/')
            } else {
                part.trim_matches('/')
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl Provider for CpanProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Cpan
    }

    async fn search(&self, name: &str) -> Result<SearchOutcome, ProviderError> {
        let url = self.dist_url(name)?;
        debug!("Fetching CPAN distribution: {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = Status::from_http(response.status().as_u16());

        match status {
            Status::Ok => {}
            Status::NotFound => {
                debug!("CPAN has no distribution named {}", name);
                return Ok(SearchOutcome::unsuccessful(status));
            }
            Status::Unavailable => {
                warn!("CPAN returned status {}: {}", response.status(), url);
                return Ok(SearchOutcome::unsuccessful(status));
            }
        }

        let body = response.bytes().await?;

        let release_set = decode_release_set(&body).map_err(|e| {
            warn!("Failed to parse CPAN response for {}: {}", name, e);
            ProviderError::InvalidResponse(e.to_string())
        })?;

        let results = self.convert(name, release_set);

        debug!("Found {} releases for package {}", results.len(), name);

        Ok(SearchOutcome::found(results))
    }
}
