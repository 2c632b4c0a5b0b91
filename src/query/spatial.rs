// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nearest-element lookups used for selection and edge endpoint binding.
//!
//! Both lookups are linear scans. A candidate qualifies when its distance is `<= radius`; among
//! qualifying candidates the smallest distance wins and exact ties go to the one inserted first.

use crate::geometry::{distance, distance_to_segment, Point};
use crate::model::{Edge, EdgeId, Floor, Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Node(NodeId),
    Edge(EdgeId),
}

pub fn find_nearest_node(floor: &Floor, x: f64, y: f64, radius: f64) -> Option<&Node> {
    let target = Point::new(x, y);
    nearest_within(floor.nodes().iter(), radius, |node| Some(distance(target, node.position())))
}

pub fn find_nearest_edge(floor: &Floor, x: f64, y: f64, radius: f64) -> Option<&Edge> {
    let target = Point::new(x, y);
    nearest_within(floor.edges().iter(), radius, |edge| {
        let a = floor.node(edge.node_a())?.position();
        let b = floor.node(edge.node_b())?.position();
        Some(distance_to_segment(target, a, b))
    })
}

/// Nodes take precedence over edges, so clicking a node that sits on an edge selects the node.
pub fn hit_test(floor: &Floor, x: f64, y: f64, radius: f64) -> Option<Hit> {
    if let Some(node) = find_nearest_node(floor, x, y, radius) {
        return Some(Hit::Node(node.node_id()));
    }
    find_nearest_edge(floor, x, y, radius).map(|edge| Hit::Edge(edge.edge_id()))
}

fn nearest_within<'a, T>(
    candidates: impl Iterator<Item = &'a T>,
    radius: f64,
    mut measure: impl FnMut(&T) -> Option<f64>,
) -> Option<&'a T>
where
    T: 'a,
{
    let mut best: Option<(&'a T, f64)> = None;
    for candidate in candidates {
        let Some(dist) = measure(candidate) else {
            continue;
        };
        if dist.is_nan() || dist > radius {
            continue;
        }
        // Strict comparison keeps the earliest candidate on exact ties.
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((candidate, dist));
        }
    }
    best.map(|(candidate, _)| candidate)
}
