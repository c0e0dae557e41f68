// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The edge-creation tool.
//!
//! Pointer events and check outcomes all arrive on one logical thread, never
//! concurrently, so the validity flag is plain state with no locking. The
//! remote check is the only suspension point and is fire-and-forget: the call
//! that issues it returns `false` synchronously, and the eventual outcome is
//! fed back through [`EdgeCreationTool::on_check_resolved`]. A newer check
//! supersedes an older one by token; a superseded outcome is discarded with
//! no observable effect.

use tracing::{debug, warn};

use crate::model::{
    CandidateEdge, CheckToken, Connectable, EdgeKindId, EdgeKindRegistry, ElementId, EndpointRole,
    Validity,
};
use crate::protocol::{Action, CheckEdgeRequest, CheckEdgeResponse, CheckError};

/// Where checks are sent. Fire-and-forget: delivery of the outcome is the
/// host loop's job, and at most the latest token's outcome matters.
pub trait CheckAuthority {
    fn submit(&mut self, token: CheckToken, request: CheckEdgeRequest);
}

/// Interactive creation of one directed edge, gated behind connectability.
///
/// The tool holds the in-progress [`CandidateEdge`] and the tri-state
/// [`Validity`] for the element under the pointer. Event handlers return the
/// directives the host should apply; the tool never applies them itself.
#[derive(Debug)]
pub struct EdgeCreationTool<A: CheckAuthority> {
    edge: CandidateEdge,
    registry: EdgeKindRegistry,
    authority: A,
    validity: Validity,
    current_target: Option<ElementId>,
    next_token: u64,
}

impl<A: CheckAuthority> EdgeCreationTool<A> {
    pub fn new(edge_kind: EdgeKindId, registry: EdgeKindRegistry, authority: A) -> Self {
        Self {
            edge: CandidateEdge::new(edge_kind),
            registry,
            authority,
            validity: Validity::Unknown,
            current_target: None,
            next_token: 1,
        }
    }

    pub fn edge(&self) -> &CandidateEdge {
        &self.edge
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// The element the pointer was last over, if any.
    pub fn current_target(&self) -> Option<&ElementId> {
        self.current_target.as_ref()
    }

    /// The role the next accepted element would take.
    pub fn pending_role(&self) -> EndpointRole {
        if self.edge.source().is_none() {
            EndpointRole::Source
        } else {
            EndpointRole::Target
        }
    }

    /// Whether `candidate` may become the `role` endpoint right now.
    ///
    /// Absent or locally-unconnectable candidates are rejected without remote
    /// traffic. Kinds without dynamic validation are accepted immediately.
    /// Kinds with dynamic validation issue a new check (superseding any check
    /// still in flight) and return `false` for this call: the interaction
    /// loop cannot wait for the network, so the endpoint stays invalid until
    /// the outcome arrives through [`Self::on_check_resolved`].
    pub fn can_accept_endpoint(
        &mut self,
        candidate: Option<&dyn Connectable>,
        role: EndpointRole,
    ) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        if !candidate.can_connect(&self.edge, role) {
            return false;
        }
        if !self.registry.requires_dynamic_check(self.edge.edge_kind()) {
            return true;
        }

        let token = self.allocate_token();
        let request = CheckEdgeRequest::for_candidate(&self.edge, candidate.id());
        self.validity = Validity::Pending {
            token,
            candidate: candidate.id().clone(),
        };
        self.authority.submit(token, request);
        false
    }

    /// Tracks the element under the pointer and re-evaluates its validity.
    ///
    /// Re-entering the same element keeps the current verdict (or the check
    /// still in flight for it). Moving anywhere else supersedes: onto another
    /// element a fresh evaluation runs, onto empty canvas the flag returns to
    /// `Unknown`.
    pub fn on_pointer_move(&mut self, hovered: Option<&dyn Connectable>) {
        let hovered_id = hovered.map(|element| element.id().clone());
        if hovered_id == self.current_target {
            return;
        }
        self.current_target = hovered_id;

        let Some(element) = hovered else {
            self.validity = Validity::Unknown;
            return;
        };

        let role = self.pending_role();
        let allowed = self.can_accept_endpoint(Some(element), role);
        match &self.validity {
            // A check was just issued for this element; leave it in flight.
            Validity::Pending { candidate, .. } if candidate == element.id() => {}
            // Anything else (including a check pending for a previous
            // element) is superseded by the local verdict.
            _ => {
                self.validity = Validity::Resolved {
                    candidate: element.id().clone(),
                    valid: allowed,
                };
            }
        }
    }

    /// Applies the outcome of a remote check, unless it has been superseded.
    ///
    /// Only the token of the most recently issued check may mutate the flag;
    /// anything else is dropped here. A failed check resolves the candidate
    /// to invalid rather than propagating: the user simply cannot commit that
    /// endpoint until the pointer moves and a new check is issued.
    pub fn on_check_resolved(
        &mut self,
        token: CheckToken,
        result: Result<CheckEdgeResponse, CheckError>,
    ) -> Vec<Action> {
        let Validity::Pending {
            token: pending,
            candidate,
        } = &self.validity
        else {
            debug!(%token, "discarding check outcome with no check in flight");
            return Vec::new();
        };
        if *pending != token {
            debug!(%token, current = %pending, "discarding superseded check outcome");
            return Vec::new();
        }
        let candidate = candidate.clone();

        match result {
            Ok(response) => {
                self.validity = Validity::Resolved {
                    candidate,
                    valid: response.is_valid,
                };
                // Refresh the stub so the host can restyle it with the verdict.
                match self.edge.source() {
                    Some(source) => vec![Action::draw_feedback_edge(self.edge.edge_kind(), source)],
                    None => Vec::new(),
                }
            }
            Err(err) => {
                warn!(%token, error = %err, "dynamic edge check failed");
                self.validity = Validity::Resolved {
                    candidate,
                    valid: false,
                };
                Vec::new()
            }
        }
    }

    /// Primary-button release over `hovered`.
    ///
    /// Commits the hovered element as source or target when the flag allows
    /// it. Committing a source resets the flag: the very same element has to
    /// qualify afresh in the target role. Once both endpoints are set the
    /// create directive is emitted, and the tool either re-arms (`continuous`)
    /// or hands interaction back to the default tools.
    pub fn on_primary_release(
        &mut self,
        hovered: Option<&dyn Connectable>,
        continuous: bool,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        let hovered_id = hovered.map(|element| element.id().clone());

        if self.edge.source().is_none() {
            if let Some(id) = hovered_id {
                if self.validity.allows(&id) {
                    self.edge.set_source(id.clone());
                    actions.push(Action::draw_feedback_edge(self.edge.edge_kind(), &id));
                    self.validity = Validity::Unknown;
                    self.current_target = None;
                }
            }
            return actions;
        }

        if let Some(id) = hovered_id {
            if self.validity.allows(&id) {
                self.edge.set_target(id);
            }
        }

        if let (Some(source), Some(target)) = (self.edge.source(), self.edge.target()) {
            actions.push(Action::create_edge(&self.edge, source, target));
            actions.extend(self.dispose());
            if !continuous {
                actions.push(Action::EnableDefaultTools);
            }
        }
        actions
    }

    /// Secondary-button release: abandon the in-progress edge.
    pub fn on_secondary_release(&mut self) -> Vec<Action> {
        let mut actions = self.dispose();
        actions.push(Action::EnableDefaultTools);
        actions
    }

    /// Discards all in-progress state, removing the feedback stub if drawn.
    ///
    /// Resetting the flag alone neutralizes any check still in flight: its
    /// token no longer matches anything, so its outcome is discarded when it
    /// arrives. No network-level cancellation is attempted.
    pub fn dispose(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.edge.source().is_some() {
            actions.push(Action::RemoveFeedbackEdge);
        }
        self.edge.clear_endpoints();
        self.validity = Validity::Unknown;
        self.current_target = None;
        actions
    }

    fn allocate_token(&mut self) -> CheckToken {
        let token = CheckToken::new(self.next_token);
        self.next_token += 1;
        token
    }
}

#[cfg(test)]
mod tests;
