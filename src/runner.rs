// Copyright (c) The gherkin-lifecycle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payload types for the callbacks a Gherkin runner delivers to the reporter.
//!
//! These mirror the runner's already-parsed model: the reporter never sees
//! feature-file text, only the structural notifications described on
//! [`GherkinReporter`](crate::GherkinReporter).

/// A feature, reported once at the start of a feature file.
#[derive(Clone, Debug)]
pub struct Feature {
    /// The feature's name.
    pub name: String,

    /// The free-form description below the feature heading. May be empty.
    pub description: String,
}

impl Feature {
    /// Creates a new `Feature`.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A scenario, reported at the start of each scenario lifecycle.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// The scenario's name.
    pub name: String,

    /// The free-form description below the scenario heading. May be empty.
    pub description: String,

    /// Tags attached to the scenario, in declaration order.
    ///
    /// Tags are free text (for example `@smoke` or `@Issue("JIRA-123")`);
    /// the reporter parses but never stores them.
    pub tags: Vec<String>,
}

impl Scenario {
    /// Creates a new `Scenario` with no tags.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: vec![],
        }
    }

    /// Adds a tag to this scenario.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }
}

/// A step as authored in the specification, identified by its source line.
///
/// Steps are reported in declaration order before any of them execute;
/// background steps arrive through the same callback as scenario steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaredStep {
    /// The source line the step was declared on.
    pub line: u32,

    /// The step text, without the leading keyword.
    pub text: String,
}

impl DeclaredStep {
    /// Creates a new `DeclaredStep`.
    pub fn new(line: u32, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

/// A declared step bound to an executable handler at run time.
#[derive(Clone, Debug)]
pub struct MatchedStep {
    /// The name of the handler the step was bound to.
    pub handler: String,

    /// The source line of the declared step behind this match.
    ///
    /// Runners must supply this; a `None` here means the runner cannot
    /// correlate matches back to declared steps and is incompatible with
    /// this adapter (see
    /// [`ReporterError::MissingStepLocation`](crate::ReporterError::MissingStepLocation)).
    pub line: Option<u32>,
}

impl MatchedStep {
    /// Creates a new `MatchedStep`.
    pub fn new(handler: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            handler: handler.into(),
            line,
        }
    }
}

/// The terminal status of an executed step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// The step passed.
    Passed,

    /// The step failed.
    Failed,

    /// The step was skipped, typically because an earlier step failed.
    Skipped,

    /// No step definition matched the step text.
    Undefined,

    /// The step definition exists but is marked as not yet implemented.
    Pending,
}

/// The execution outcome of a step, reported after the step completes.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// The terminal status.
    pub status: StepStatus,

    /// The failure cause, if any.
    pub message: Option<String>,
}

impl StepResult {
    /// Creates a new `StepResult` with the given status and no message.
    pub fn new(status: StepStatus) -> Self {
        Self {
            status,
            message: None,
        }
    }

    /// Creates a passed result.
    pub fn passed() -> Self {
        Self::new(StepStatus::Passed)
    }

    /// Creates a failed result with the given cause.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: StepStatus::Failed,
            message: Some(message.into()),
        }
    }

    /// Creates a skipped result.
    pub fn skipped() -> Self {
        Self::new(StepStatus::Skipped)
    }

    /// Sets the failure cause.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }
}
