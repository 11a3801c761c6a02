// Copyright (c) The gherkin-lifecycle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured metadata extracted from scenario tags.
//!
//! Tags are free text; a small fixed grammar of prefixes carries structured
//! metadata. Parsing is total: text that fails to parse degrades to a
//! default (with a logged warning) rather than producing an error.

use crate::errors::ParseSeverityError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::{fmt, str::FromStr};
use tracing::warn;

static SEVERITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@SeverityLevel\.(.+)$").unwrap());
static ISSUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^@Issue\("+?([^"]+)"+?\)$"#).unwrap());
static TEST_CASE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^@TestCaseId\("+?([^"]+)"+?\)$"#).unwrap());

/// The severity of a test case.
///
/// Variants are ordered from most to least severe, so of two levels the
/// *minimum* is the more severe one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Blocks the release.
    Blocker,
    /// Critical functionality is broken.
    Critical,
    /// The default severity.
    Normal,
    /// A minor issue.
    Minor,
    /// A cosmetic issue.
    Trivial,
}

impl SeverityLevel {
    /// Returns the lowercase name of this level.
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Blocker => "blocker",
            SeverityLevel::Critical => "critical",
            SeverityLevel::Normal => "normal",
            SeverityLevel::Minor => "minor",
            SeverityLevel::Trivial => "trivial",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blocker" => Ok(SeverityLevel::Blocker),
            "critical" => Ok(SeverityLevel::Critical),
            "normal" => Ok(SeverityLevel::Normal),
            "minor" => Ok(SeverityLevel::Minor),
            "trivial" => Ok(SeverityLevel::Trivial),
            other => Err(ParseSeverityError::new(other)),
        }
    }
}

/// Resolves the severity for a set of scenario tags.
///
/// Tags of the form `@SeverityLevel.<LEVEL>` contribute a candidate level
/// (matched case-insensitively); the most severe candidate wins regardless of
/// tag order. An unrecognized level logs a warning and counts as
/// [`SeverityLevel::Normal`]. Returns `None` when no tag matches, in which
/// case the caller omits the severity label entirely.
pub fn resolve_severity<'a>(tags: impl IntoIterator<Item = &'a str>) -> Option<SeverityLevel> {
    let mut resolved: Option<SeverityLevel> = None;
    for tag in tags {
        let Some(captures) = SEVERITY_REGEX.captures(tag) else {
            continue;
        };
        let text = &captures[1];
        let level = match text.to_lowercase().parse() {
            Ok(level) => level,
            Err(_) => {
                warn!("unexpected severity level {text}, using normal instead");
                SeverityLevel::Normal
            }
        };
        resolved = Some(match resolved {
            Some(current) if current <= level => current,
            _ => level,
        });
    }
    resolved
}

/// Collects issue identifiers from `@Issue("<id>")` tags, in tag order.
pub fn extract_issues<'a>(tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    tags.into_iter()
        .filter_map(|tag| ISSUE_REGEX.captures(tag))
        .map(|captures| captures[1].to_owned())
        .collect()
}

/// Returns the test case id from the first `@TestCaseId("<id>")` tag.
///
/// Later matches are ignored: first match wins.
pub fn extract_test_case_id<'a>(tags: impl IntoIterator<Item = &'a str>) -> Option<String> {
    tags.into_iter()
        .find_map(|tag| TEST_CASE_ID_REGEX.captures(tag))
        .map(|captures| captures[1].to_owned())
}

/// A name/value pair attached to a suite or case event.
///
/// Labels are independent of one another; the order in which they are
/// applied to an event does not matter, since no label reads another's
/// output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Label {
    /// The label name.
    pub name: String,

    /// The label value.
    pub value: String,
}

impl Label {
    /// Creates a new `Label`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A severity label.
    pub fn severity(level: SeverityLevel) -> Self {
        Self::new("severity", level.as_str())
    }

    /// An issue link label.
    pub fn issue(value: impl Into<String>) -> Self {
        Self::new("issue", value)
    }

    /// A test case id label.
    pub fn test_case_id(value: impl Into<String>) -> Self {
        Self::new("testId", value)
    }

    /// A feature grouping label.
    pub fn feature(value: impl Into<String>) -> Self {
        Self::new("feature", value)
    }

    /// A story grouping label.
    pub fn story(value: impl Into<String>) -> Self {
        Self::new("story", value)
    }

    /// The identity of the test framework driving the reporter.
    pub fn framework(value: impl Into<String>) -> Self {
        Self::new("framework", value)
    }
}
