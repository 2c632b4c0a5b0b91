// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::edge::Edge;
use super::ids::{EdgeId, NodeId};
use super::node::Node;
use super::node_type::NodeType;

/// One level of a building: its nodes and edges in insertion order.
///
/// Insertion order is observable: spatial queries break ties by it and exports walk it.
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    name: String,
    image_name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: NodeId,
    next_edge_id: EdgeId,
}

impl Floor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_name: String::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            next_node_id: NodeId::new(0),
            next_edge_id: EdgeId::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// File name of the background image. The bitmap itself lives with the UI.
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    pub fn set_image_name(&mut self, image_name: impl Into<String>) {
        self.image_name = image_name.into();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.node_id() == node_id)
    }

    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.node_id() == node_id)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.edge_id() == edge_id)
    }

    pub fn edge_mut(&mut self, edge_id: EdgeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.edge_id() == edge_id)
    }

    /// The edge joining `first` and `second` in either orientation.
    pub fn edge_between(&self, first: NodeId, second: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.joins(first, second))
    }

    pub fn edges_touching(&self, node_id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.touches(node_id))
    }

    pub(crate) fn insert_node(&mut self, x: f64, y: f64, node_type: NodeType) -> NodeId {
        let node_id = self.next_node_id;
        self.next_node_id = node_id.next();
        self.nodes.push(Node::new(node_id, x, y, node_type));
        node_id
    }

    /// Appends an edge without any validation; callers check endpoints and policy first.
    pub(crate) fn insert_edge(&mut self, node_a: NodeId, node_b: NodeId) -> EdgeId {
        let edge_id = self.next_edge_id;
        self.next_edge_id = edge_id.next();
        self.edges.push(Edge::new(edge_id, node_a, node_b));
        edge_id
    }

    /// Removes a node and every edge touching it. Returns the removed edge ids, or `None` when
    /// the node does not exist.
    pub(crate) fn remove_node(&mut self, node_id: NodeId) -> Option<Vec<EdgeId>> {
        let index = self.nodes.iter().position(|n| n.node_id() == node_id)?;
        self.nodes.remove(index);

        let removed = self.edges_touching(node_id).map(Edge::edge_id).collect::<Vec<_>>();
        self.edges.retain(|e| !e.touches(node_id));
        Some(removed)
    }

    pub(crate) fn remove_edge(&mut self, edge_id: EdgeId) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.edge_id() == edge_id)?;
        Some(self.edges.remove(index))
    }
}
