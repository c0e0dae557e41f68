// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Channel plumbing between the tool and a remote authority.
//!
//! The tool only ever calls [`CheckAuthority::submit`]; everything here is
//! transport. Outcomes flow back through a second channel that the host's
//! event loop drains into [`EdgeCreationTool::on_check_resolved`]. The
//! channel makes no at-most-once promise: every response may be delivered,
//! and staleness is decided by the tool's token comparison, not here.
//!
//! [`EdgeCreationTool::on_check_resolved`]: crate::tool::EdgeCreationTool::on_check_resolved

use std::thread;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::model::CheckToken;
use crate::protocol::{CheckEdgeRequest, CheckEdgeResponse, CheckError};
use crate::tool::CheckAuthority;

/// One submitted check traveling to the authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheck {
    pub token: CheckToken,
    pub request: CheckEdgeRequest,
}

/// One answered (or failed) check traveling back to the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub token: CheckToken,
    pub result: Result<CheckEdgeResponse, CheckError>,
}

/// [`CheckAuthority`] over unbounded mpsc channels.
///
/// Submission is fire-and-forget. If the authority side is already gone, a
/// `ChannelClosed` outcome is pushed immediately so the check does not hang
/// as pending forever on the tool side.
#[derive(Debug, Clone)]
pub struct ChannelAuthority {
    requests: mpsc::UnboundedSender<PendingCheck>,
    outcomes: mpsc::UnboundedSender<CheckOutcome>,
}

impl CheckAuthority for ChannelAuthority {
    fn submit(&mut self, token: CheckToken, request: CheckEdgeRequest) {
        if self.requests.send(PendingCheck { token, request }).is_err() {
            let _ = self.outcomes.send(CheckOutcome {
                token,
                result: Err(CheckError::ChannelClosed),
            });
        }
    }
}

/// The loose ends of a check channel, for hosts that run the authority side
/// themselves (async tasks, tests).
#[derive(Debug)]
pub struct CheckChannel {
    pub authority: ChannelAuthority,
    pub requests: mpsc::UnboundedReceiver<PendingCheck>,
    pub outcomes: mpsc::UnboundedReceiver<CheckOutcome>,
    pub outcome_tx: mpsc::UnboundedSender<CheckOutcome>,
}

pub fn check_channel() -> CheckChannel {
    let (request_tx, requests) = mpsc::unbounded_channel();
    let (outcome_tx, outcomes) = mpsc::unbounded_channel();
    CheckChannel {
        authority: ChannelAuthority {
            requests: request_tx,
            outcomes: outcome_tx.clone(),
        },
        requests,
        outcomes,
        outcome_tx,
    }
}

/// Runs a verdict rule on its own thread, with artificial latency.
///
/// Intended for sync host loops (the demo TUI): the thread blocks on the
/// request channel and exits when the last [`ChannelAuthority`] clone is
/// dropped. `latency` is applied per request, before the rule runs, so
/// superseding can actually be observed interactively.
pub fn spawn_validator<F>(
    latency: Duration,
    mut rule: F,
) -> (
    ChannelAuthority,
    mpsc::UnboundedReceiver<CheckOutcome>,
    thread::JoinHandle<()>,
)
where
    F: FnMut(&CheckEdgeRequest) -> Result<CheckEdgeResponse, CheckError> + Send + 'static,
{
    let CheckChannel {
        authority,
        mut requests,
        outcomes,
        outcome_tx,
    } = check_channel();

    let handle = thread::spawn(move || {
        while let Some(PendingCheck { token, request }) = requests.blocking_recv() {
            if !latency.is_zero() {
                thread::sleep(latency);
            }
            let result = rule(&request);
            if outcome_tx.send(CheckOutcome { token, result }).is_err() {
                break;
            }
        }
    });

    (authority, outcomes, handle)
}
