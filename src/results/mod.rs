//! Normalized release data shared by every provider
//!
//! A provider turns whatever its upstream API returns into a [`ResultSet`]:
//! one [`Release`] per published version, in the order the upstream listed
//! them. Fields the provider could not populate are left unset and the reason
//! is recorded as an [`Issue`] on the set instead of failing the search.

mod status;

pub use status::Status;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// A single release of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub name: String,
    /// Version exactly as published upstream
    pub version: String,
    /// Publish time, `None` when the upstream value could not be parsed
    pub published: Option<DateTime<Utc>>,
    /// Download location, `None` when it could not be derived
    pub location: Option<Url>,
}

impl Release {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            published: None,
            location: None,
        }
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let published = self
            .published
            .map(|p| p.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        let location = self
            .location
            .as_ref()
            .map(Url::as_str)
            .unwrap_or("-");
        write!(
            f,
            "{} {} {} {}",
            self.name, self.version, published, location
        )
    }
}

/// Field of a [`Release`] that could not be populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    Published,
    Location,
}

impl IssueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueField::Published => "published",
            IssueField::Location => "location",
        }
    }
}

/// Non-fatal problem found while converting an upstream record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Position of the affected release in the result set
    pub index: usize,
    pub field: IssueField,
    pub message: String,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "release #{}: {} left unset: {}",
            self.index,
            self.field.as_str(),
            self.message
        )
    }
}

/// All releases found for one queried name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    /// The name that was searched for
    pub name: String,
    pub results: Vec<Release>,
    pub issues: Vec<Issue>,
}

impl ResultSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            results: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Appends a release, keeping insertion order
    pub fn add_result(&mut self, release: Release) {
        self.results.push(release);
    }

    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
