// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scripted compose sessions.
//!
//! Each non-empty line not starting with `#` is one wizard command, e.g.
//! `type 구치소` or `next`. Refused commands are reported and the session
//! continues; a retreat from the first phase ends it.

use color_eyre::{Result, eyre::Context, eyre::eyre};
use orange_mail::{Command, ComposeWizard, Outcome, parse_script_line};
use orange_mail_domain::{SavedAddress, SenderInfo, default_saved_addresses, default_sender};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::report::render_wizard;

/// Final state of a scripted session.
#[derive(Debug, Serialize)]
struct SessionSummary {
    phase: u8,
    phase_label: &'static str,
    closed: bool,
    rejected: usize,
    steps: Vec<orange_mail::StepState>,
}

/// Reads the script from `script` or standard input and runs it.
///
/// The session opens with the default sender unless `blank_sender` is set.
pub fn run(json: bool, script: Option<&Path>, blank_sender: bool) -> Result<()> {
    let source: String = match script {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer: String = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read standard input")?;
            buffer
        }
    };

    let sender: SenderInfo = if blank_sender {
        SenderInfo::default()
    } else {
        default_sender()
    };
    let (wizard, closed, rejected) = run_script(&source, sender, &default_saved_addresses())?;

    if json {
        let phase = wizard.phase();
        let summary: SessionSummary = SessionSummary {
            phase: phase.number(),
            phase_label: phase.label(),
            closed,
            rejected,
            steps: wizard.all_step_states(),
        };
        let encoded: String =
            serde_json::to_string_pretty(&summary).wrap_err("Failed to encode JSON")?;
        println!("{encoded}");
    } else {
        println!("{}", render_wizard(&wizard));
        if closed {
            println!("작성을 취소했습니다");
        }
    }
    Ok(())
}

/// Runs every command in `source` against a wizard opened with `sender`.
///
/// Returns the wizard, whether the session was closed, and how many commands
/// were refused.
///
/// # Errors
///
/// Returns an error naming the line number if a line does not parse.
fn run_script(
    source: &str,
    sender: SenderInfo,
    saved_addresses: &[SavedAddress],
) -> Result<(ComposeWizard, bool, usize)> {
    let mut wizard: ComposeWizard = ComposeWizard::with_sender(sender);
    let mut rejected: usize = 0;

    for (index, line) in source.lines().enumerate() {
        let line: &str = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_number: usize = index + 1;
        let command: Command = parse_script_line(line, saved_addresses)
            .map_err(|e| eyre!("line {line_number}: {e}"))?;

        match wizard.dispatch(command) {
            Outcome::Applied => {}
            Outcome::Rejected(reason) => {
                rejected += 1;
                warn!(line = line_number, "{reason}");
            }
            Outcome::CloseRequested => {
                info!(line = line_number, "Session closed");
                return Ok((wizard, true, rejected));
            }
        }
    }

    Ok((wizard, false, rejected))
}
