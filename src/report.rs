//! Rendering of lookup results for the command line

use std::fmt;

use serde::Serialize;

use crate::results::{Issue, Release, Status};
use crate::upstream::lookup::Lookup;

/// Human readable listing, one block per looked up name
pub fn render_text(lookups: &[Lookup]) -> String {
    TextReport(lookups).to_string()
}

struct TextReport<'a>(&'a [Lookup]);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lookup in self.0 {
            match &lookup.outcome {
                Ok(outcome) => match &outcome.results {
                    Some(results) => {
                        writeln!(
                            f,
                            "{}: {}, {} releases",
                            lookup.name,
                            outcome.status,
                            results.len()
                        )?;
                        for release in results {
                            writeln!(f, "  {}", release)?;
                        }
                        for issue in &results.issues {
                            writeln!(f, "  warning: {}", issue)?;
                        }
                    }
                    None => writeln!(f, "{}: {}", lookup.name, outcome.status)?,
                },
                Err(e) => writeln!(f, "{}: error: {}", lookup.name, e)?,
            }
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct LookupView<'a> {
    name: &'a str,
    status: Option<Status>,
    results: &'a [Release],
    issues: &'a [Issue],
    error: Option<String>,
}

impl<'a> From<&'a Lookup> for LookupView<'a> {
    fn from(lookup: &'a Lookup) -> Self {
        match &lookup.outcome {
            Ok(outcome) => {
                let (results, issues) = outcome
                    .results
                    .as_ref()
                    .map(|set| (set.results.as_slice(), set.issues.as_slice()))
                    .unwrap_or_default();
                LookupView {
                    name: &lookup.name,
                    status: Some(outcome.status),
                    results,
                    issues,
                    error: None,
                }
            }
            Err(e) => LookupView {
                name: &lookup.name,
                status: None,
                results: &[],
                issues: &[],
                error: Some(e.to_string()),
            },
        }
    }
}

/// JSON array with one object per looked up name
pub fn render_json(lookups: &[Lookup]) -> serde_json::Result<String> {
    let views: Vec<LookupView<'_>> = lookups.iter().map(LookupView::from).collect();
    serde_json::to_string_pretty(&views)
}
