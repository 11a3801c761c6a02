// Copyright (c) The gherkin-lifecycle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapt Gherkin runner callbacks into structured test lifecycle events.
//!
//! The main type here is [`GherkinReporter`]. A Gherkin runner drives it
//! through one callback per structural event (feature started, scenario
//! started, step declared, match found, result available, scenario finished,
//! run finished), and the reporter translates each callback into zero or more
//! [`LifecycleEvent`]s delivered to a [`LifecycleSink`].
//!
//! Along the way the reporter reconciles the declared step order against the
//! steps the runner actually matched, inferring skipped steps that the runner
//! never reports as such, and extracts structured metadata (severity, issue
//! links, test case ids) from free-text scenario tags.
//!
//! ```
//! use gherkin_lifecycle::{Feature, GherkinReporter, Scenario};
//!
//! let mut reporter = GherkinReporter::new(Vec::new());
//! reporter.feature_started(Feature::new("Checkout", "Checkout flows"));
//! reporter.scenario_started(&Scenario::new("Happy path", ""))?;
//! reporter.scenario_finished();
//! reporter.run_finished();
//!
//! // suite-started, case-started, case-finished, suite-finished
//! assert_eq!(reporter.into_sink().len(), 4);
//! # Ok::<(), gherkin_lifecycle::ReporterError>(())
//! ```

mod errors;
mod events;
mod labels;
mod reporter;
mod runner;

pub use errors::*;
pub use events::*;
pub use labels::*;
pub use reporter::*;
pub use runner::*;
