// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{EdgeId, NodeId};
use crate::geometry::Point;

/// The axis an edge's travel direction letters are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeAxis {
    #[default]
    LeftRight,
    UpDown,
}

impl EdgeAxis {
    /// Letter describing travel from `from` to `to` along this axis.
    ///
    /// Canvas y grows downward, so an increasing y is `D`.
    pub fn letter(self, from: Point, to: Point) -> char {
        match self {
            Self::LeftRight if to.x > from.x => 'R',
            Self::LeftRight => 'L',
            Self::UpDown if to.y > from.y => 'D',
            Self::UpDown => 'U',
        }
    }
}

/// A traversable connection between two nodes of the same floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    edge_id: EdgeId,
    node_a: NodeId,
    node_b: NodeId,
    axis: EdgeAxis,
    accessible: bool,
    closed: bool,
    a_to_b: bool,
    b_to_a: bool,
}

impl Edge {
    pub fn new(edge_id: EdgeId, node_a: NodeId, node_b: NodeId) -> Self {
        Self {
            edge_id,
            node_a,
            node_b,
            axis: EdgeAxis::default(),
            accessible: true,
            closed: false,
            a_to_b: true,
            b_to_a: true,
        }
    }

    pub fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    pub fn node_a(&self) -> NodeId {
        self.node_a
    }

    pub fn node_b(&self) -> NodeId {
        self.node_b
    }

    pub fn touches(&self, node_id: NodeId) -> bool {
        self.node_a == node_id || self.node_b == node_id
    }

    /// `true` when this edge joins the same unordered pair of nodes.
    pub fn joins(&self, first: NodeId, second: NodeId) -> bool {
        (self.node_a == first && self.node_b == second)
            || (self.node_a == second && self.node_b == first)
    }

    /// Swaps the endpoints together with their traversal flags.
    pub fn swap_endpoints(&mut self) {
        std::mem::swap(&mut self.node_a, &mut self.node_b);
        std::mem::swap(&mut self.a_to_b, &mut self.b_to_a);
    }

    pub fn axis(&self) -> EdgeAxis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: EdgeAxis) {
        self.axis = axis;
    }

    pub fn accessible(&self) -> bool {
        self.accessible
    }

    pub fn set_accessible(&mut self, accessible: bool) {
        self.accessible = accessible;
    }

    /// Closed edges are excluded from routing.
    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn a_to_b(&self) -> bool {
        self.a_to_b
    }

    pub fn set_a_to_b(&mut self, a_to_b: bool) {
        self.a_to_b = a_to_b;
    }

    pub fn b_to_a(&self) -> bool {
        self.b_to_a
    }

    pub fn set_b_to_a(&mut self, b_to_a: bool) {
        self.b_to_a = b_to_a;
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeAxis};
    use crate::geometry::Point;
    use crate::model::{EdgeId, NodeId};

    #[test]
    fn swapping_endpoints_keeps_traversal_semantics() {
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        let mut edge = Edge::new(EdgeId::new(0), a, b);
        edge.set_b_to_a(false);

        edge.swap_endpoints();

        assert_eq!(edge.node_a(), b);
        assert_eq!(edge.node_b(), a);
        // Travel was only allowed a -> b, which is now b_to_a.
        assert!(!edge.a_to_b());
        assert!(edge.b_to_a());
        assert!(edge.joins(a, b));
        assert!(edge.joins(b, a));
    }

    #[test]
    fn axis_letters_follow_coordinate_growth() {
        let left = Point::new(0.0, 10.0);
        let right = Point::new(5.0, 0.0);

        assert_eq!(EdgeAxis::LeftRight.letter(left, right), 'R');
        assert_eq!(EdgeAxis::LeftRight.letter(right, left), 'L');
        assert_eq!(EdgeAxis::UpDown.letter(right, left), 'D');
        assert_eq!(EdgeAxis::UpDown.letter(left, right), 'U');
    }
}
