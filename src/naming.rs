// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonical names for nodes and the deterministic edge orientation built on them.
//!
//! A canonical name is `B<building>-` (only when a building id is set), the type identifier and
//! the node name, e.g. `B12-R101` or `H7`. Exports, project documents and edge orientation all
//! key on it.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{EdgeId, Floor, Node, NodeType, Project};

pub fn canonical_name(node: &Node) -> String {
    let mut name = String::with_capacity(node.building_id().len() + node.name().len() + 3);
    if !node.building_id().is_empty() {
        name.push('B');
        name.push_str(node.building_id());
        name.push('-');
    }
    name.push(node.node_type().identifier());
    name.push_str(node.name());
    name
}

/// Canonical name followed by the rounded position, for lists shown to the user.
pub fn display_name(node: &Node) -> String {
    format!("{} ({}, {})", canonical_name(node), node.x().round(), node.y().round())
}

/// Gives every unnamed node a synthesized integer name and returns how many were assigned.
///
/// Names already present anywhere in the project are reserved before any synthesis begins, so
/// synthesized names never collide with user-supplied ones or with each other. Each node type
/// keeps its own counter, starting at 1 and skipping taken values.
pub fn assign_missing_names(project: &mut Project) -> usize {
    let mut taken = project
        .floors()
        .iter()
        .flat_map(|floor| floor.nodes())
        .filter(|node| !node.name().is_empty())
        .map(|node| node.name().to_owned())
        .collect::<HashSet<_>>();
    let mut counters = [1u64; NodeType::COUNT];
    let mut assigned = 0;

    for floor in project.floors_mut() {
        for node in floor.nodes_mut() {
            if !node.name().is_empty() {
                continue;
            }
            let counter = &mut counters[node.node_type().index()];
            let mut candidate = counter.to_string();
            while taken.contains(&candidate) {
                *counter += 1;
                candidate = counter.to_string();
            }
            *counter += 1;
            taken.insert(candidate.clone());
            node.assign_name(candidate);
            assigned += 1;
        }
    }

    assigned
}

/// Forgets every synthesized name so the next [`assign_missing_names`] starts fresh.
pub fn clear_assigned_names(project: &mut Project) -> usize {
    let mut cleared = 0;
    for floor in project.floors_mut() {
        for node in floor.nodes_mut() {
            if node.assigned_name() {
                node.clear_assigned_name();
                cleared += 1;
            }
        }
    }
    cleared
}

/// Order in which two nodes should appear as an edge's endpoints.
///
/// A node carrying a building id goes first when the other has none; otherwise canonical names
/// compare case-sensitively.
pub fn endpoint_order(first: &Node, second: &Node) -> Ordering {
    match (first.building_id().is_empty(), second.building_id().is_empty()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => canonical_name(first).cmp(&canonical_name(second)),
    }
}

/// Puts the edge's first-ordered endpoint in `node_a`. Returns `true` when the endpoints were
/// swapped; unknown edges and edges with missing endpoints are left alone.
pub fn canonicalize_edge_endpoints(floor: &mut Floor, edge_id: EdgeId) -> bool {
    let Some(edge) = floor.edge(edge_id) else {
        return false;
    };
    let (Some(a), Some(b)) = (floor.node(edge.node_a()), floor.node(edge.node_b())) else {
        return false;
    };
    if endpoint_order(a, b) != Ordering::Greater {
        return false;
    }
    if let Some(edge) = floor.edge_mut(edge_id) {
        edge.swap_endpoints();
    }
    true
}

/// Canonicalizes every edge of every floor.
pub fn canonicalize_edges(project: &mut Project) {
    for floor in project.floors_mut() {
        let edge_ids = floor.edges().iter().map(|edge| edge.edge_id()).collect::<Vec<_>>();
        for edge_id in edge_ids {
            canonicalize_edge_endpoints(floor, edge_id);
        }
    }
}
