// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod apply;
mod command;
mod error;
mod phase;
mod state;
mod step;
mod steps;
mod wizard;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, can_proceed};
pub use command::{Command, parse_script_line};
pub use error::CoreError;
pub use phase::Phase;
pub use state::{ComposeState, Outcome, Rejection, TransitionResult};
pub use step::{StepDef, StepGate, StepId, StepState, SubWizard, Toggle};
pub use steps::{
    RECIPIENT_STEPS, SENDER_STEPS, recipient_complete, recipient_gate, sender_complete,
    sender_gate,
};
pub use wizard::ComposeWizard;
