// Copyright (c) The gherkin-lifecycle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reporter: session state, step reconciliation and event emission.

use crate::{
    errors::ReporterError,
    events::{LifecycleEvent, LifecycleSink},
    labels::{self, Label},
    runner::{DeclaredStep, Feature, MatchedStep, Scenario, StepResult, StepStatus},
};
use std::collections::VecDeque;
use uuid::Uuid;

/// The default value of the framework label attached to every case.
pub const DEFAULT_FRAMEWORK: &str = "cucumber";

/// Adapts a Gherkin runner's callbacks into lifecycle events.
///
/// The runner drives the reporter strictly sequentially, one callback per
/// structural event:
///
/// ```text
/// feature_started
///   scenario_started
///     step_declared*
///     (match_found, result)*
///   scenario_finished
///   ... more scenarios ...
/// run_finished
/// ```
///
/// Beyond forwarding suite/case/step boundaries, the reporter tracks the
/// declared step order and diffs it against the matches the runner reports.
/// When a later step is matched while an earlier declared step was never
/// matched (typically an undefined step definition), the earlier step is
/// reported as a skipped step with a compensating
/// started/canceled/finished sequence plus a case-canceled event, since the
/// runner itself never reports that situation.
///
/// All state is owned by the instance; independent test runs should use
/// independent reporters.
#[derive(Clone, Debug)]
pub struct GherkinReporter<S> {
    sink: S,
    framework: String,

    // Suite-scoped state, replaced at the next feature start.
    feature: Option<Feature>,
    suite_id: Option<Uuid>,

    // Scenario-scoped state, cleared at scenario end. `declared` holds the
    // steps not yet confirmed executed; `accessed` the lines that were.
    declared: VecDeque<DeclaredStep>,
    accessed: Vec<u32>,
    in_flight: Option<MatchedStep>,

    // Never reset, so attachment names stay unique across scenarios.
    counter: u64,
}

impl<S: LifecycleSink> GherkinReporter<S> {
    /// Creates a new reporter emitting into `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            framework: DEFAULT_FRAMEWORK.to_owned(),
            feature: None,
            suite_id: None,
            declared: VecDeque::new(),
            accessed: vec![],
            in_flight: None,
            counter: 0,
        }
    }

    /// Sets the value of the framework label attached to every case.
    pub fn set_framework(&mut self, framework: impl Into<String>) -> &mut Self {
        self.framework = framework.into();
        self
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the reporter, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// A feature started: opens a suite with a freshly generated identifier.
    pub fn feature_started(&mut self, feature: Feature) {
        let id = Uuid::new_v4();
        self.suite_id = Some(id);

        let event = LifecycleEvent::SuiteStarted {
            id,
            name: feature.name.clone(),
            labels: vec![Label::feature(feature.name.as_str())],
            description: feature.description.clone(),
        };
        self.feature = Some(feature);
        self.sink.fire(event);
    }

    /// A scenario's lifecycle started: opens a case carrying the metadata
    /// extracted from the scenario's tags.
    ///
    /// Returns [`ReporterError::ScenarioOutsideFeature`] if no feature was
    /// reported first.
    pub fn scenario_started(&mut self, scenario: &Scenario) -> Result<(), ReporterError> {
        let feature = self.feature.as_ref().ok_or_else(|| {
            ReporterError::ScenarioOutsideFeature {
                scenario: scenario.name.clone(),
            }
        })?;

        let tags = scenario.tags.iter().map(String::as_str);

        let mut case_labels = Vec::new();
        if let Some(level) = labels::resolve_severity(tags.clone()) {
            case_labels.push(Label::severity(level));
        }
        case_labels.extend(labels::extract_issues(tags.clone()).into_iter().map(Label::issue));
        if let Some(id) = labels::extract_test_case_id(tags) {
            case_labels.push(Label::test_case_id(id));
        }
        case_labels.push(Label::feature(feature.name.as_str()));
        case_labels.push(Label::story(scenario.name.as_str()));
        case_labels.push(Label::framework(self.framework.as_str()));

        self.sink.fire(LifecycleEvent::CaseStarted {
            title: scenario.name.clone(),
            labels: case_labels,
            description: scenario.description.clone(),
        });
        Ok(())
    }

    /// A step was declared for the current scenario.
    pub fn step_declared(&mut self, step: DeclaredStep) {
        self.declared.push_back(step);
    }

    /// A step was matched to a handler and is about to execute.
    ///
    /// If the match corresponds to the head of the declared queue this is
    /// the expected in-order case. Otherwise, if the matched line was not
    /// already confirmed executed and declared steps remain, the head of the
    /// queue is treated as skipped: a compensating
    /// started/canceled/finished sequence is emitted for it, followed by a
    /// case-canceled event. Either way a step-started event is then emitted
    /// for the match itself, named after its handler.
    ///
    /// Returns [`ReporterError::MissingStepLocation`] if the match does not
    /// carry its declared step's line.
    pub fn match_found(&mut self, matched: MatchedStep) -> Result<(), ReporterError> {
        let line = matched
            .line
            .ok_or_else(|| ReporterError::MissingStepLocation {
                handler: matched.handler.clone(),
            })?;

        match self.declared.front().map(|step| step.line) {
            Some(head) if head == line => {
                if let Some(step) = self.declared.pop_front() {
                    self.accessed.push(step.line);
                }
            }
            Some(_) if !self.accessed.contains(&line) => {
                if let Some(skipped) = self.declared.pop_front() {
                    self.sink.fire(LifecycleEvent::StepStarted {
                        name: skipped.text.clone(),
                        title: skipped.text,
                    });
                    self.sink.fire(LifecycleEvent::StepCanceled);
                    self.sink.fire(LifecycleEvent::StepFinished);
                    self.sink.fire(LifecycleEvent::CaseCanceled);
                }
            }
            _ => {}
        }

        self.sink.fire(LifecycleEvent::StepStarted {
            name: matched.handler.clone(),
            title: matched.handler.clone(),
        });
        self.in_flight = Some(matched);
        Ok(())
    }

    /// The in-flight step finished with `result`.
    ///
    /// A result with no match in flight is ignored; this legitimately
    /// happens for steps the reconciler already resolved as skipped.
    pub fn result(&mut self, result: &StepResult) {
        if self.in_flight.is_none() {
            return;
        }

        match result.status {
            StepStatus::Failed => {
                let cause = result.message.clone().unwrap_or_default();
                self.sink.fire(LifecycleEvent::StepFailure {
                    cause: cause.clone(),
                });
                self.sink.fire(LifecycleEvent::CaseFailure { cause });
            }
            StepStatus::Skipped => {
                self.sink.fire(LifecycleEvent::StepCanceled);
            }
            StepStatus::Passed | StepStatus::Undefined | StepStatus::Pending => {}
        }
        self.sink.fire(LifecycleEvent::StepFinished);
        self.in_flight = None;
    }

    /// The scenario's lifecycle ended: closes the case and unconditionally
    /// clears the scenario-scoped step records.
    pub fn scenario_finished(&mut self) {
        self.sink.fire(LifecycleEvent::CaseFinished);
        self.declared.clear();
        self.accessed.clear();
    }

    /// The run ended: closes the active suite, if any, and clears its
    /// identifier.
    pub fn run_finished(&mut self) {
        if let Some(id) = self.suite_id.take() {
            self.sink.fire(LifecycleEvent::SuiteFinished { id });
        }
    }

    /// Relays a binary attachment produced during step execution.
    pub fn embedding(&mut self, mime_type: impl Into<String>, bytes: Vec<u8>) {
        let name = format!("attachment{}", self.next_index());
        self.sink.fire(LifecycleEvent::Attachment {
            name,
            bytes,
            mime_type: mime_type.into(),
        });
    }

    /// Relays free-form text written during step execution as a
    /// `text/plain` attachment.
    pub fn write(&mut self, text: &str) {
        let name = format!("message{}", self.next_index());
        self.sink.fire(LifecycleEvent::Attachment {
            name,
            bytes: text.as_bytes().to_vec(),
            mime_type: "text/plain".to_owned(),
        });
    }

    fn next_index(&mut self) -> u64 {
        let index = self.counter;
        self.counter += 1;
        index
    }
}
