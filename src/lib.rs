// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — server-checked interactive edge creation for diagram editors.
//!
//! The core is [`tool::EdgeCreationTool`]: it gates pointer-driven endpoint
//! selection behind an asynchronous legality check when the edge kind
//! requires one, and guarantees that a stale answer from a superseded check
//! can never leak into a later decision.

pub mod model;
pub mod protocol;
pub mod remote;
pub mod tool;
pub mod tui;
