// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the floor graph.
//!
//! Batches are applied all-or-nothing and produce a minimal delta that the editing surface can
//! use to refresh whatever it draws. The free functions at the bottom are single-op shortcuts
//! used by the editor session.

use std::collections::BTreeSet;
use std::fmt;

use crate::connectivity::{check_pair, ConnectivityError};
use crate::model::{EdgeAxis, EdgeId, Floor, NodeId, NodeType, Project};
use crate::model::project::DEFAULT_NEW_FLOOR_NAME;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Floor(FloorOp),
    Node(NodeOp),
    Edge(EdgeOp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloorOp {
    Add { name: Option<String> },
    Rename { floor: usize, name: String },
    SetImage { floor: usize, image_name: String },
    Move { floor: usize, direction: MoveDirection },
    Delete { floor: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeOp {
    Add { floor: usize, x: f64, y: f64, node_type: NodeType },
    Update { floor: usize, node_id: NodeId, patch: NodePatch },
    Remove { floor: usize, node_id: NodeId },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub node_type: Option<NodeType>,
    pub building_id: Option<String>,
    pub name: Option<String>,
    pub additional: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeOp {
    Add { floor: usize, node_a: NodeId, node_b: NodeId },
    Update { floor: usize, edge_id: EdgeId, patch: EdgePatch },
    Remove { floor: usize, edge_id: EdgeId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgePatch {
    pub axis: Option<EdgeAxis>,
    pub accessible: Option<bool>,
    pub closed: Option<bool>,
    pub a_to_b: Option<bool>,
    pub b_to_a: Option<bool>,
}

/// Something a delta can point at. Floor indices are as of the end of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRef {
    Floor { index: usize },
    Node { floor: usize, node_id: NodeId },
    Edge { floor: usize, edge_id: EdgeId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing which elements changed as the result of applying ops.
///
/// This is intentionally coarse: it reports only added/removed/updated `ElementRef`s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<ElementRef>,
    pub removed: Vec<ElementRef>,
    pub updated: Vec<ElementRef>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<ElementRef>,
    removed: BTreeSet<ElementRef>,
    updated: BTreeSet<ElementRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, element: ElementRef) {
        self.removed.remove(&element);
        self.updated.remove(&element);
        self.added.insert(element);
    }

    fn record_removed(&mut self, element: ElementRef) {
        // Added and removed within one batch: the caller never saw it.
        if self.added.remove(&element) {
            self.updated.remove(&element);
            return;
        }
        self.updated.remove(&element);
        self.removed.insert(element);
    }

    fn record_updated(&mut self, element: ElementRef) {
        if self.added.contains(&element) || self.removed.contains(&element) {
            return;
        }
        self.updated.insert(element);
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
        }
    }
}

/// Applies `ops` in order. Either every op succeeds and the project is updated, or the first
/// failure is returned and the project is left untouched.
pub fn apply_ops(project: &mut Project, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
    if ops.is_empty() {
        return Ok(ApplyResult { applied: 0, delta: Delta::default() });
    }

    let mut floors = project.floors().to_vec();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        match op {
            Op::Floor(floor_op) => apply_floor_op(&mut floors, floor_op, &mut delta)?,
            Op::Node(node_op) => apply_node_op(&mut floors, node_op, &mut delta)?,
            Op::Edge(edge_op) => apply_edge_op(&mut floors, edge_op, &mut delta)?,
        }
    }

    project.replace_floors(floors);
    Ok(ApplyResult { applied: ops.len(), delta: delta.finish() })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyError {
    FloorNotFound { floor: usize },
    LastFloor,
    FloorMoveOutOfRange { floor: usize, direction: MoveDirection },
    NodeNotFound { floor: usize, node_id: NodeId },
    EdgeNotFound { floor: usize, edge_id: EdgeId },
    SelfLoop { floor: usize, node_id: NodeId },
    DuplicateEdge { floor: usize, existing: EdgeId },
    Connectivity { floor: usize, source: ConnectivityError },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloorNotFound { floor } => write!(f, "floor not found (index={floor})"),
            Self::LastFloor => f.write_str("cannot delete the last floor"),
            Self::FloorMoveOutOfRange { floor, direction } => {
                write!(f, "cannot move floor {floor} {direction:?}")
            }
            Self::NodeNotFound { floor, node_id } => {
                write!(f, "node not found (floor={floor}, id={node_id})")
            }
            Self::EdgeNotFound { floor, edge_id } => {
                write!(f, "edge not found (floor={floor}, id={edge_id})")
            }
            Self::SelfLoop { floor, node_id } => {
                write!(f, "edge endpoints must differ (floor={floor}, node={node_id})")
            }
            Self::DuplicateEdge { floor, existing } => {
                write!(f, "nodes are already connected by edge {existing} (floor={floor})")
            }
            Self::Connectivity { floor, source } => write!(f, "{source} (floor={floor})"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connectivity { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Appends a floor and returns its index.
pub fn add_floor(project: &mut Project, name: impl Into<String>) -> usize {
    let floors = project.floors_mut();
    floors.push(Floor::new(name));
    floors.len() - 1
}

/// Swaps a floor with its neighbour. Returns the floor's new index.
pub fn move_floor(
    project: &mut Project,
    floor: usize,
    direction: MoveDirection,
) -> Result<usize, ApplyError> {
    move_floor_in(project.floors_mut(), floor, direction)
}

pub fn delete_floor(project: &mut Project, floor: usize) -> Result<Floor, ApplyError> {
    delete_floor_in(project.floors_mut(), floor)
}

pub fn add_node(
    project: &mut Project,
    floor: usize,
    x: f64,
    y: f64,
    node_type: NodeType,
) -> Result<NodeId, ApplyError> {
    let target = floor_mut(project.floors_mut(), floor)?;
    Ok(target.insert_node(x, y, node_type))
}

pub fn update_node(
    project: &mut Project,
    floor: usize,
    node_id: NodeId,
    patch: &NodePatch,
) -> Result<(), ApplyError> {
    update_node_in(project.floors_mut(), floor, node_id, patch)
}

/// Removes a node and every edge touching it. Returns the ids of the removed edges.
pub fn remove_node(
    project: &mut Project,
    floor: usize,
    node_id: NodeId,
) -> Result<Vec<EdgeId>, ApplyError> {
    remove_node_in(project.floors_mut(), floor, node_id)
}

pub fn add_edge(
    project: &mut Project,
    floor: usize,
    node_a: NodeId,
    node_b: NodeId,
) -> Result<EdgeId, ApplyError> {
    add_edge_in(project.floors_mut(), floor, node_a, node_b)
}

pub fn update_edge(
    project: &mut Project,
    floor: usize,
    edge_id: EdgeId,
    patch: &EdgePatch,
) -> Result<(), ApplyError> {
    update_edge_in(project.floors_mut(), floor, edge_id, patch)
}

pub fn remove_edge(project: &mut Project, floor: usize, edge_id: EdgeId) -> Result<(), ApplyError> {
    remove_edge_in(project.floors_mut(), floor, edge_id)
}

fn default_floor_name(name: &Option<String>) -> String {
    name.clone().unwrap_or_else(|| DEFAULT_NEW_FLOOR_NAME.to_owned())
}

// Extracted op-application implementation for floor/node/edge mutations.
include!("ops_impl.rs");
