// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The in-progress edge and its validity flag.

use std::fmt;

use crate::model::{EdgeKindId, ElementId};

/// Which terminus of the candidate edge an element is being considered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Source,
    Target,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Correlation token for one remote check.
///
/// Tokens are assigned monotonically by the tool; the remote authority echoes
/// them back untouched. A response is applied only if its token still matches
/// the pending one, which is the entire supersede mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckToken(u64);

impl CheckToken {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CheckToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "check#{}", self.0)
    }
}

/// An in-progress, not-yet-committed connection.
///
/// Created when the user starts drawing an edge; destroyed when the edge is
/// committed, the tool is cancelled, or another tool takes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEdge {
    edge_kind: EdgeKindId,
    source: Option<ElementId>,
    target: Option<ElementId>,
}

impl CandidateEdge {
    pub fn new(edge_kind: EdgeKindId) -> Self {
        Self {
            edge_kind,
            source: None,
            target: None,
        }
    }

    pub fn edge_kind(&self) -> &EdgeKindId {
        &self.edge_kind
    }

    pub fn source(&self) -> Option<&ElementId> {
        self.source.as_ref()
    }

    pub fn target(&self) -> Option<&ElementId> {
        self.target.as_ref()
    }

    pub fn set_source(&mut self, source: ElementId) {
        self.source = Some(source);
    }

    pub fn set_target(&mut self, target: ElementId) {
        self.target = Some(target);
    }

    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }

    /// Drops both endpoints, keeping the kind (re-arm in continuous mode).
    pub fn clear_endpoints(&mut self) {
        self.source = None;
        self.target = None;
    }
}

/// Tri-state legality verdict for the element currently under the pointer.
///
/// Owned exclusively by the tool. The candidate element is bound into the
/// `Pending` and `Resolved` states so a verdict can never be read against a
/// different element than the one it was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// No check yet, or every previous check has been superseded.
    Unknown,
    /// A remote check is in flight for `candidate`.
    Pending {
        token: CheckToken,
        candidate: ElementId,
    },
    /// The latest check (or an immediate local verdict) for `candidate`.
    Resolved { candidate: ElementId, valid: bool },
}

impl Validity {
    /// True only while the flag is `Resolved { valid: true }` for exactly
    /// this element.
    pub fn allows(&self, candidate: &ElementId) -> bool {
        matches!(self, Self::Resolved { candidate: c, valid: true } if c == candidate)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The token a response must carry to be applied, if any.
    pub fn pending_token(&self) -> Option<CheckToken> {
        match self {
            Self::Pending { token, .. } => Some(*token),
            _ => None,
        }
    }
}
