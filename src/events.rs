// Copyright (c) The gherkin-lifecycle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle events emitted to the reporting sink.

use crate::labels::Label;
use serde::Serialize;
use uuid::Uuid;

/// A lifecycle event.
///
/// Events are produced by a [`GherkinReporter`](crate::GherkinReporter) and
/// consumed by a [`LifecycleSink`]. Within one run they form a well-nested
/// sequence: a suite bracket around one case bracket per scenario, with step
/// brackets inside.
///
/// The serialized form is tagged with a kebab-case `kind` field, so
/// structured sinks can persist events as JSON lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LifecycleEvent {
    /// A test suite began execution.
    SuiteStarted {
        /// The unique identifier for this suite, generated at feature start.
        id: Uuid,

        /// The feature name.
        name: String,

        /// Labels attached to the suite.
        labels: Vec<Label>,

        /// The feature's free-form description. May be empty.
        description: String,
    },

    /// A test case (scenario) began execution.
    CaseStarted {
        /// The scenario name.
        title: String,

        /// Labels attached to the case, including any metadata extracted
        /// from scenario tags.
        labels: Vec<Label>,

        /// The scenario's free-form description. May be empty.
        description: String,
    },

    /// A step began execution.
    StepStarted {
        /// The event name, also used as the display title.
        name: String,

        /// The display title.
        title: String,
    },

    /// The current step failed.
    StepFailure {
        /// The failure cause.
        cause: String,
    },

    /// The current step was canceled (skipped).
    StepCanceled,

    /// The current step finished.
    StepFinished,

    /// The current case failed.
    CaseFailure {
        /// The failure cause.
        cause: String,
    },

    /// The current case was canceled because a required step never executed.
    CaseCanceled,

    /// The current case finished.
    CaseFinished,

    /// The active suite finished.
    SuiteFinished {
        /// The identifier generated at the corresponding suite start.
        id: Uuid,
    },

    /// An attachment produced during step execution.
    Attachment {
        /// A name unique for the lifetime of the producing reporter.
        name: String,

        /// The attachment contents.
        bytes: Vec<u8>,

        /// The MIME type of the contents.
        mime_type: String,
    },
}

/// A consumer of lifecycle events.
///
/// Sinks are responsible for persistence or rendering; the reporter only
/// guarantees delivery order. Attachments are associated with whichever step
/// is open at the time of receipt.
pub trait LifecycleSink {
    /// Delivers one event to the sink.
    fn fire(&mut self, event: LifecycleEvent);
}

/// Buffers fired events in order. Useful for tests and batching sinks.
impl LifecycleSink for Vec<LifecycleEvent> {
    fn fire(&mut self, event: LifecycleEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = LifecycleEvent::StepFailure {
            cause: "assertion failed".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"kind": "step-failure", "cause": "assertion failed"}),
        );

        let event = LifecycleEvent::StepFinished;
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"kind": "step-finished"}),
        );

        let event = LifecycleEvent::Attachment {
            name: "message0".to_owned(),
            bytes: b"hi".to_vec(),
            mime_type: "text/plain".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "kind": "attachment",
                "name": "message0",
                "bytes": [104, 105],
                "mime_type": "text/plain",
            }),
        );
    }
}
