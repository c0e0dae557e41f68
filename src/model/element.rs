// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The connectability capability seam.

use crate::model::{CandidateEdge, ElementId, EndpointRole};

/// Local connectability: a synchronous, client-side-only legality check.
///
/// The tool treats the host's elements as opaque behind this trait. A `false`
/// answer short-circuits endpoint acceptance without any remote traffic; a
/// `true` answer is only the local half of the decision when the edge kind
/// also requires dynamic validation.
pub trait Connectable {
    fn id(&self) -> &ElementId;

    fn can_connect(&self, edge: &CandidateEdge, role: EndpointRole) -> bool;
}

/// A ready-made element for hosts that have no richer model of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    kind: String,
    accepts_source: bool,
    accepts_target: bool,
}

impl Element {
    pub fn new(id: ElementId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            accepts_source: true,
            accepts_target: true,
        }
    }

    /// Restricts which roles this element accepts, e.g. a junction that may
    /// only ever be a target.
    pub fn with_roles(mut self, accepts_source: bool, accepts_target: bool) -> Self {
        self.accepts_source = accepts_source;
        self.accepts_target = accepts_target;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl Connectable for Element {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn can_connect(&self, _edge: &CandidateEdge, role: EndpointRole) -> bool {
        match role {
            EndpointRole::Source => self.accepts_source,
            EndpointRole::Target => self.accepts_target,
        }
    }
}
