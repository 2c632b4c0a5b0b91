// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::floor::Floor;
use super::node_type::{Color, NodeType, NodeTypeColors};

pub const DEFAULT_NODE_SIZE: f64 = 4.0;
pub const DEFAULT_FIRST_FLOOR_NAME: &str = "First";
pub const DEFAULT_NEW_FLOOR_NAME: &str = "New floor";

/// The multi-floor document being edited and exported.
///
/// A project always holds at least one floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    name: String,
    format: String,
    node_size: f64,
    node_type_colors: NodeTypeColors,
    floors: Vec<Floor>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: String::new(),
            node_size: DEFAULT_NODE_SIZE,
            node_type_colors: NodeTypeColors::default(),
            floors: vec![Floor::new(DEFAULT_FIRST_FLOOR_NAME)],
        }
    }

    /// Builds a project from existing floors. Returns `None` when `floors` is empty.
    pub fn with_floors(name: impl Into<String>, floors: Vec<Floor>) -> Option<Self> {
        if floors.is_empty() {
            return None;
        }
        Some(Self { floors, ..Self::new(name) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Free-form hint carried into the `[FORMAT]` section of the combined export.
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    pub fn node_size(&self) -> f64 {
        self.node_size
    }

    /// Negative or non-finite sizes fall back to [`DEFAULT_NODE_SIZE`].
    pub fn set_node_size(&mut self, node_size: f64) {
        self.node_size = if node_size.is_finite() && node_size >= 0.0 {
            node_size
        } else {
            DEFAULT_NODE_SIZE
        };
    }

    pub fn node_type_colors(&self) -> &NodeTypeColors {
        &self.node_type_colors
    }

    pub fn set_node_type_color(&mut self, node_type: NodeType, color: Color) {
        self.node_type_colors.set(node_type, color);
    }

    pub(crate) fn set_node_type_colors(&mut self, colors: NodeTypeColors) {
        self.node_type_colors = colors;
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, index: usize) -> Option<&Floor> {
        self.floors.get(index)
    }

    pub fn floor_mut(&mut self, index: usize) -> Option<&mut Floor> {
        self.floors.get_mut(index)
    }

    pub(crate) fn floors_mut(&mut self) -> &mut Vec<Floor> {
        &mut self.floors
    }

    pub(crate) fn replace_floors(&mut self, floors: Vec<Floor>) {
        debug_assert!(!floors.is_empty());
        self.floors = floors;
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new("")
    }
}
