// Copyright (c) The gherkin-lifecycle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by the reporter.

use thiserror::Error;

/// A structural fault while adapting runner callbacks.
///
/// These indicate an incompatible or misbehaving runner, not a test
/// failure; test failures flow through the lifecycle events themselves.
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum ReporterError {
    /// A step match carried no declared-step location, so the match cannot
    /// be reconciled against the declared step order. The runner is
    /// incompatible with this adapter.
    #[error("step match for handler `{handler}` carries no declared step location")]
    MissingStepLocation {
        /// The handler name the step was bound to.
        handler: String,
    },

    /// A scenario was reported before any feature, so there is no active
    /// suite to attach its case to.
    #[error("scenario `{scenario}` was reported outside of an active feature")]
    ScenarioOutsideFeature {
        /// The scenario name.
        scenario: String,
    },
}

/// An error parsing a severity level out of tag text.
///
/// Returned by [`SeverityLevel::from_str`](crate::SeverityLevel). Severity
/// resolution recovers from this internally by degrading to the normal
/// level.
#[derive(Clone, Debug, Error)]
#[error("unknown severity level `{input}`")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
