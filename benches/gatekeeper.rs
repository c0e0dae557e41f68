// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use proteus::model::{CheckToken, EdgeKindHint, EdgeKindRegistry, Element};
use proteus::protocol::{CheckEdgeRequest, CheckEdgeResponse};
use proteus::tool::{CheckAuthority, EdgeCreationTool};

// Benchmark identity (keep stable):
// - Group name in this file: `gatekeeper.hover`
// - Case IDs: `static_kind`, `dynamic_kind_churn`.
const HOVER_CHURN: usize = 1_000;

#[derive(Debug, Default)]
struct SinkAuthority {
    submitted: u64,
    last: Option<CheckToken>,
}

impl CheckAuthority for SinkAuthority {
    fn submit(&mut self, token: CheckToken, request: CheckEdgeRequest) {
        black_box(&request);
        self.submitted += 1;
        self.last = Some(token);
    }
}

fn registry() -> EdgeKindRegistry {
    let mut registry = EdgeKindRegistry::new();
    registry.register(
        "relation".parse().expect("kind"),
        EdgeKindHint { dynamic: true },
    );
    registry.register(
        "note-attachment".parse().expect("kind"),
        EdgeKindHint { dynamic: false },
    );
    registry
}

fn elements() -> Vec<Element> {
    (0..16)
        .map(|idx| Element::new(format!("element-{idx}").parse().expect("id"), "node"))
        .collect()
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("gatekeeper.hover");
    group.throughput(Throughput::Elements(HOVER_CHURN as u64));

    let elements = elements();

    group.bench_function("static_kind", |b| {
        b.iter_batched(
            || {
                EdgeCreationTool::new(
                    "note-attachment".parse().expect("kind"),
                    registry(),
                    SinkAuthority::default(),
                )
            },
            |mut tool| {
                for idx in 0..HOVER_CHURN {
                    tool.on_pointer_move(Some(&elements[idx % elements.len()]));
                }
                black_box(tool.authority().submitted)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("dynamic_kind_churn", |b| {
        b.iter_batched(
            || {
                EdgeCreationTool::new(
                    "relation".parse().expect("kind"),
                    registry(),
                    SinkAuthority::default(),
                )
            },
            |mut tool| {
                for idx in 0..HOVER_CHURN {
                    tool.on_pointer_move(Some(&elements[idx % elements.len()]));
                    // Resolve every fourth check so supersede and apply paths
                    // both stay hot.
                    if idx % 4 == 0 {
                        if let Some(token) = tool.authority().last {
                            tool.on_check_resolved(
                                token,
                                Ok(CheckEdgeResponse { is_valid: true }),
                            );
                        }
                    }
                }
                black_box(tool.authority().submitted)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_hover);
criterion_main!(benches);
