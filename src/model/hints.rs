// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static per-edge-kind properties.

use std::collections::BTreeMap;

use crate::model::EdgeKindId;

/// Hints the editor declares once per edge kind, before any interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeKindHint {
    /// Whether a remote authority must additionally confirm legality for
    /// this kind. Kinds without this flag are decided locally and instantly.
    pub dynamic: bool,
}

/// Registry of edge-kind hints.
///
/// Unknown kinds fall back to the default hint (static-only): an editor that
/// never registered a kind gets the cheap behavior, not a remote round-trip.
#[derive(Debug, Clone, Default)]
pub struct EdgeKindRegistry {
    hints: BTreeMap<EdgeKindId, EdgeKindHint>,
}

impl EdgeKindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EdgeKindId, hint: EdgeKindHint) {
        self.hints.insert(kind, hint);
    }

    pub fn hint(&self, kind: &EdgeKindId) -> EdgeKindHint {
        self.hints.get(kind).copied().unwrap_or_default()
    }

    pub fn requires_dynamic_check(&self, kind: &EdgeKindId) -> bool {
        self.hint(kind).dynamic
    }

    pub fn kinds(&self) -> impl Iterator<Item = &EdgeKindId> {
        self.hints.keys()
    }
}
