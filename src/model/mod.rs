// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Typed ids, the in-progress candidate edge with its tri-state validity
//! flag, the connectability capability seam, and the edge-kind registry.

pub mod edge;
pub mod element;
pub mod hints;
pub mod ids;

pub use edge::{CandidateEdge, CheckToken, EndpointRole, Validity};
pub use element::{Connectable, Element};
pub use hints::{EdgeKindHint, EdgeKindRegistry};
pub use ids::{EdgeKindId, ElementId, Id, IdError};
