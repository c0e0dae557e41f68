// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{CheckAuthority, EdgeCreationTool};
use crate::model::{
    CheckToken, Connectable, EdgeKindHint, EdgeKindRegistry, Element, EndpointRole, Validity,
};
use crate::protocol::{Action, CheckEdgeRequest, CheckEdgeResponse, CheckError};

/// Records submissions instead of sending them anywhere.
#[derive(Debug, Default)]
struct RecordingAuthority {
    submitted: Vec<(CheckToken, CheckEdgeRequest)>,
}

impl CheckAuthority for RecordingAuthority {
    fn submit(&mut self, token: CheckToken, request: CheckEdgeRequest) {
        self.submitted.push((token, request));
    }
}

impl RecordingAuthority {
    fn last_token(&self) -> CheckToken {
        self.submitted.last().expect("at least one submitted check").0
    }
}

fn registry() -> EdgeKindRegistry {
    let mut registry = EdgeKindRegistry::new();
    registry.register(
        "relation".parse().expect("valid kind"),
        EdgeKindHint { dynamic: true },
    );
    registry.register(
        "note-attachment".parse().expect("valid kind"),
        EdgeKindHint { dynamic: false },
    );
    registry
}

fn tool(edge_kind: &str) -> EdgeCreationTool<RecordingAuthority> {
    EdgeCreationTool::new(
        edge_kind.parse().expect("valid kind"),
        registry(),
        RecordingAuthority::default(),
    )
}

fn element(id: &str) -> Element {
    Element::new(id.parse().expect("valid element id"), "application-component")
}

fn submitted(tool: &EdgeCreationTool<RecordingAuthority>) -> &[(CheckToken, CheckEdgeRequest)] {
    &tool_authority(tool).submitted
}

fn tool_authority(tool: &EdgeCreationTool<RecordingAuthority>) -> &RecordingAuthority {
    tool.authority()
}

#[test]
fn static_kind_is_accepted_immediately_without_remote_calls() {
    let mut tool = tool("note-attachment");
    let e1 = element("e1");

    assert!(tool.can_accept_endpoint(Some(&e1), EndpointRole::Source));
    assert!(submitted(&tool).is_empty());
}

#[test]
fn absent_candidate_is_rejected_without_remote_calls() {
    let mut tool = tool("relation");

    assert!(!tool.can_accept_endpoint(None, EndpointRole::Source));
    assert!(submitted(&tool).is_empty());
}

#[test]
fn locally_unconnectable_candidate_short_circuits_dynamic_kind() {
    let mut tool = tool("relation");
    let sealed = Element::new("sealed".parse().expect("valid id"), "note").with_roles(false, false);

    assert!(!tool.can_accept_endpoint(Some(&sealed), EndpointRole::Source));
    assert!(submitted(&tool).is_empty());
}

#[test]
fn dynamic_kind_returns_false_and_issues_check() {
    let mut tool = tool("relation");
    let e1 = element("e1");

    assert!(!tool.can_accept_endpoint(Some(&e1), EndpointRole::Source));

    let checks = submitted(&tool);
    assert_eq!(checks.len(), 1);
    let (_, request) = &checks[0];
    assert_eq!(request.edge_kind, "relation");
    assert_eq!(request.source_element.as_deref(), Some("e1"));
    assert_eq!(request.target_element, None);
    assert!(tool.validity().is_pending());
}

#[test]
fn check_request_carries_committed_source_and_candidate_target() {
    let mut tool = tool("relation");
    let e1 = element("e1");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e1));
    let token = tool_authority(&tool).last_token();
    tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));
    tool.on_primary_release(Some(&e1), false);
    assert_eq!(tool.edge().source().map(|id| id.as_str()), Some("e1"));

    tool.on_pointer_move(Some(&e2));
    let (_, request) = submitted(&tool).last().expect("target check submitted");
    assert_eq!(request.source_element.as_deref(), Some("e1"));
    assert_eq!(request.target_element.as_deref(), Some("e2"));
}

#[test]
fn superseded_outcome_has_no_effect() {
    let mut tool = tool("relation");
    let e2 = element("e2");
    let e3 = element("e3");

    tool.on_pointer_move(Some(&e2));
    let token_a = tool_authority(&tool).last_token();
    tool.on_pointer_move(Some(&e3));
    let token_b = tool_authority(&tool).last_token();
    assert_ne!(token_a, token_b);

    // A resolves valid, but B superseded it: still pending on B.
    let actions = tool.on_check_resolved(token_a, Ok(CheckEdgeResponse { is_valid: true }));
    assert!(actions.is_empty());
    assert_eq!(tool.validity().pending_token(), Some(token_b));
    assert!(!tool.validity().allows(e3.id()));
    assert!(!tool.validity().allows(e2.id()));

    // B's own resolution applies.
    tool.on_check_resolved(token_b, Ok(CheckEdgeResponse { is_valid: true }));
    assert!(tool.validity().allows(e3.id()));
}

#[test]
fn moving_to_empty_canvas_supersedes_pending_check() {
    let mut tool = tool("relation");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e2));
    let token = tool_authority(&tool).last_token();
    tool.on_pointer_move(None);
    assert_eq!(tool.validity(), &Validity::Unknown);

    tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));
    assert_eq!(tool.validity(), &Validity::Unknown);
}

#[test]
fn moving_to_unconnectable_element_supersedes_pending_check() {
    let mut tool = tool("relation");
    let e2 = element("e2");
    let sealed = Element::new("sealed".parse().expect("valid id"), "note").with_roles(false, false);

    tool.on_pointer_move(Some(&e2));
    let token = tool_authority(&tool).last_token();
    tool.on_pointer_move(Some(&sealed));

    tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));
    assert!(!tool.validity().allows(e2.id()));
    assert!(!tool.validity().allows(sealed.id()));
}

#[test]
fn failed_check_resolves_candidate_to_invalid() {
    let mut tool = tool("relation");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e2));
    let token = tool_authority(&tool).last_token();
    let actions = tool.on_check_resolved(
        token,
        Err(CheckError::Authority {
            message: "boom".to_owned(),
        }),
    );

    assert!(actions.is_empty());
    assert_eq!(
        tool.validity(),
        &Validity::Resolved {
            candidate: e2.id().clone(),
            valid: false,
        }
    );
    // The in-flight marker is cleared; nothing is pending forever.
    assert!(!tool.validity().is_pending());
}

#[test]
fn re_entering_same_element_does_not_reissue_check() {
    let mut tool = tool("relation");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e2));
    tool.on_pointer_move(Some(&e2));
    assert_eq!(submitted(&tool).len(), 1);
}

#[test]
fn release_while_check_pending_commits_nothing() {
    let mut tool = tool("relation");
    let e1 = element("e1");

    tool.on_pointer_move(Some(&e1));
    let actions = tool.on_primary_release(Some(&e1), false);

    assert!(actions.is_empty());
    assert!(tool.edge().source().is_none());
}

#[test]
fn committing_source_draws_proxy_feedback_and_resets_validity() {
    let mut tool = tool("relation");
    let e1 = element("e1");

    tool.on_pointer_move(Some(&e1));
    let token = tool_authority(&tool).last_token();
    tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));

    let actions = tool.on_primary_release(Some(&e1), false);
    assert_eq!(
        actions,
        vec![Action::DrawFeedbackEdge {
            element_type_id: "proxy-relation".to_owned(),
            source_id: "e1".to_owned(),
        }]
    );
    // The same element must qualify afresh in the target role.
    assert_eq!(tool.validity(), &Validity::Unknown);
    assert_eq!(tool.current_target(), None);
}

#[test]
fn resolution_with_stub_on_screen_returns_feedback_refresh() {
    let mut tool = tool("relation");
    let e1 = element("e1");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e1));
    let token = tool_authority(&tool).last_token();
    tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));
    tool.on_primary_release(Some(&e1), false);

    tool.on_pointer_move(Some(&e2));
    let token = tool_authority(&tool).last_token();
    let actions = tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));
    assert_eq!(
        actions,
        vec![Action::DrawFeedbackEdge {
            element_type_id: "proxy-relation".to_owned(),
            source_id: "e1".to_owned(),
        }]
    );
}

#[test]
fn static_kind_full_flow_creates_edge_and_enables_default_tools() {
    let mut tool = tool("note-attachment");
    let e1 = element("e1");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e1));
    tool.on_primary_release(Some(&e1), false);

    tool.on_pointer_move(Some(&e2));
    let actions = tool.on_primary_release(Some(&e2), false);

    assert_eq!(
        actions,
        vec![
            Action::CreateEdge {
                edge_kind: "note-attachment".to_owned(),
                source_id: "e1".to_owned(),
                target_id: "e2".to_owned(),
            },
            Action::RemoveFeedbackEdge,
            Action::EnableDefaultTools,
        ]
    );
    assert!(submitted(&tool).is_empty());
    assert!(tool.edge().source().is_none());
}

#[test]
fn continuous_mode_rearms_instead_of_enabling_default_tools() {
    let mut tool = tool("note-attachment");
    let e1 = element("e1");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e1));
    tool.on_primary_release(Some(&e1), true);
    tool.on_pointer_move(Some(&e2));
    let actions = tool.on_primary_release(Some(&e2), true);

    assert_eq!(
        actions,
        vec![
            Action::CreateEdge {
                edge_kind: "note-attachment".to_owned(),
                source_id: "e1".to_owned(),
                target_id: "e2".to_owned(),
            },
            Action::RemoveFeedbackEdge,
        ]
    );
    // Re-armed: same kind, no endpoints, ready for the next edge.
    assert_eq!(tool.edge().edge_kind().as_str(), "note-attachment");
    assert!(tool.edge().source().is_none());
    assert!(tool.edge().target().is_none());
}

#[test]
fn secondary_release_abandons_and_enables_default_tools() {
    let mut tool = tool("relation");
    let e1 = element("e1");
    let e2 = element("e2");

    tool.on_pointer_move(Some(&e1));
    let token = tool_authority(&tool).last_token();
    tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));
    tool.on_primary_release(Some(&e1), false);
    tool.on_pointer_move(Some(&e2));

    let actions = tool.on_secondary_release();
    assert_eq!(
        actions,
        vec![Action::RemoveFeedbackEdge, Action::EnableDefaultTools]
    );
    assert!(tool.edge().source().is_none());
    assert_eq!(tool.validity(), &Validity::Unknown);
    assert!(!actions
        .iter()
        .any(|action| matches!(action, Action::CreateEdge { .. })));
}

#[test]
fn secondary_release_without_feedback_only_enables_default_tools() {
    let mut tool = tool("relation");

    let actions = tool.on_secondary_release();
    assert_eq!(actions, vec![Action::EnableDefaultTools]);
}

#[test]
fn dispose_neutralizes_in_flight_check() {
    let mut tool = tool("relation");
    let e1 = element("e1");

    tool.on_pointer_move(Some(&e1));
    let token = tool_authority(&tool).last_token();
    tool.dispose();

    let actions = tool.on_check_resolved(token, Ok(CheckEdgeResponse { is_valid: true }));
    assert!(actions.is_empty());
    assert_eq!(tool.validity(), &Validity::Unknown);
}
