// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;
use super::node_type::NodeType;
use crate::geometry::Point;

/// A point of interest placed on a floor plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    x: f64,
    y: f64,
    node_type: NodeType,
    building_id: String,
    name: String,
    additional: String,
    assigned_name: bool,
}

impl Node {
    pub fn new(node_id: NodeId, x: f64, y: f64, node_type: NodeType) -> Self {
        Self {
            node_id,
            x,
            y,
            node_type,
            building_id: String::new(),
            name: String::new(),
            additional: String::new(),
            assigned_name: false,
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn set_node_type(&mut self, node_type: NodeType) {
        self.node_type = node_type;
    }

    pub fn building_id(&self) -> &str {
        &self.building_id
    }

    pub fn set_building_id(&mut self, building_id: impl Into<String>) {
        self.building_id = building_id.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets a user-supplied name. The node no longer counts as auto-named.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.assigned_name = false;
    }

    /// Free-text payload whose meaning depends on the type (street nodes keep their street
    /// direction groups here).
    pub fn additional(&self) -> &str {
        &self.additional
    }

    pub fn set_additional(&mut self, additional: impl Into<String>) {
        self.additional = additional.into();
    }

    /// `true` when `name` was synthesized by [`assign_missing_names`](crate::naming::assign_missing_names).
    pub fn assigned_name(&self) -> bool {
        self.assigned_name
    }

    pub(crate) fn assign_name(&mut self, name: String) {
        self.name = name;
        self.assigned_name = true;
    }

    pub(crate) fn clear_assigned_name(&mut self) {
        if self.assigned_name {
            self.name.clear();
            self.assigned_name = false;
        }
    }

    pub(crate) fn restore_assigned_flag(&mut self, assigned_name: bool) {
        self.assigned_name = assigned_name;
    }
}
