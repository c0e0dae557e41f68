// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire types and outbound directives.
//!
//! The request/response pair crosses whatever channel the embedding editor
//! provides, so fields are plain strings here; typed ids live in the core.
//! Directives are what the tool hands back to the host for application.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{CandidateEdge, EdgeKindId, ElementId};

/// Asks the remote authority whether a candidate connection would be legal.
///
/// Either endpoint may be unset: while the user is still picking a source,
/// the hovered element is sent as the source and the target stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckEdgeRequest {
    pub edge_kind: String,
    pub source_element: Option<String>,
    pub target_element: Option<String>,
}

impl CheckEdgeRequest {
    /// Builds the request for `candidate` joining the in-progress edge.
    ///
    /// If the edge has no source yet the candidate is the prospective source;
    /// otherwise the committed source is sent and the candidate is the
    /// prospective target.
    pub fn for_candidate(edge: &CandidateEdge, candidate: &ElementId) -> Self {
        let (source, target) = match edge.source() {
            Some(source) => (source.clone(), Some(candidate.clone())),
            None => (candidate.clone(), None),
        };
        Self {
            edge_kind: edge.edge_kind().as_str().to_owned(),
            source_element: Some(source.into_string()),
            target_element: target.map(ElementId::into_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckEdgeResponse {
    pub is_valid: bool,
}

/// Why a remote check produced no verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The channel to the authority is gone (host shutting down, validator
    /// dropped). No verdict will ever arrive for this token.
    ChannelClosed,
    /// The authority answered with an error instead of a verdict.
    Authority { message: String },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelClosed => f.write_str("check channel closed"),
            Self::Authority { message } => write!(f, "authority error: {message}"),
        }
    }
}

impl std::error::Error for CheckError {}

/// Directives the tool emits for the host to apply.
///
/// These mirror the editor-side actions of the embedding framework; the tool
/// never applies them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Action {
    /// Draw (or refresh) the visual edge stub anchored at the committed
    /// source. `element_type_id` is the `proxy-` feedback kind.
    DrawFeedbackEdge {
        element_type_id: String,
        source_id: String,
    },
    /// Remove the visual edge stub.
    RemoveFeedbackEdge,
    /// Create the real edge; both endpoints have been accepted.
    CreateEdge {
        edge_kind: String,
        source_id: String,
        target_id: String,
    },
    /// Hand interaction back to the default (non-edge-creation) tools.
    EnableDefaultTools,
}

impl Action {
    pub(crate) fn draw_feedback_edge(kind: &EdgeKindId, source: &ElementId) -> Self {
        Self::DrawFeedbackEdge {
            element_type_id: kind.proxy().into_string(),
            source_id: source.as_str().to_owned(),
        }
    }

    pub(crate) fn create_edge(edge: &CandidateEdge, source: &ElementId, target: &ElementId) -> Self {
        Self::CreateEdge {
            edge_kind: edge.edge_kind().as_str().to_owned(),
            source_id: source.as_str().to_owned(),
            target_id: target.as_str().to_owned(),
        }
    }
}
