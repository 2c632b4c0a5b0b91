// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// The kind of place a node stands for.
///
/// The discriminant is the integer tag stored in project documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeType {
    Door = 0,
    Stairs = 1,
    Elevator = 2,
    Hallway = 3,
    Room = 4,
    Street = 5,
    Path = 6,
    Intersection = 7,
}

impl NodeType {
    pub const COUNT: usize = 8;

    pub const ALL: [NodeType; Self::COUNT] = [
        Self::Door,
        Self::Stairs,
        Self::Elevator,
        Self::Hallway,
        Self::Room,
        Self::Street,
        Self::Path,
        Self::Intersection,
    ];

    pub fn from_tag(tag: u8) -> Result<Self, UnknownNodeType> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(UnknownNodeType::Tag { tag })
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Single character prefixed to the node name in canonical names.
    pub fn identifier(self) -> char {
        match self {
            Self::Door => 'D',
            Self::Stairs => 'S',
            Self::Elevator => 'E',
            Self::Hallway => 'H',
            Self::Room => 'R',
            Self::Street => 'T',
            Self::Path => 'P',
            Self::Intersection => 'I',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Door => "Door",
            Self::Stairs => "Stairs",
            Self::Elevator => "Elevator",
            Self::Hallway => "Hallway",
            Self::Room => "Room",
            Self::Street => "Street",
            Self::Path => "Path",
            Self::Intersection => "Intersection",
        }
    }

    fn default_color(self) -> Color {
        match self {
            Self::Door => Color::new(0, 255, 0),
            Self::Stairs => Color::new(255, 0, 0),
            Self::Elevator => Color::new(255, 255, 0),
            Self::Hallway => Color::new(0, 0, 255),
            Self::Room => Color::new(0, 0, 0),
            Self::Street => Color::new(255, 0, 255),
            Self::Path => Color::new(0, 255, 255),
            Self::Intersection => Color::new(128, 128, 128),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A node type tag outside the known enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownNodeType {
    Tag { tag: u8 },
}

impl fmt::Display for UnknownNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag { tag } => write!(f, "unknown node type tag: {tag}"),
        }
    }
}

impl std::error::Error for UnknownNodeType {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Editor fill color per node type. Has no influence on exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTypeColors {
    colors: [Color; NodeType::COUNT],
}

impl NodeTypeColors {
    pub fn get(&self, node_type: NodeType) -> Color {
        self.colors[node_type.index()]
    }

    pub fn set(&mut self, node_type: NodeType, color: Color) {
        self.colors[node_type.index()] = color;
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeType, Color)> + '_ {
        NodeType::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

impl Default for NodeTypeColors {
    fn default() -> Self {
        Self { colors: NodeType::ALL.map(NodeType::default_color) }
    }
}
