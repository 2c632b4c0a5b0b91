// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON project document.
//!
//! Edges are stored by the canonical names of their endpoints and resolved back to node ids on
//! load. Every field has a serde default so documents written by older editors still load.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::connectivity::{check_pair, ConnectivityError};
use crate::model::project::DEFAULT_NODE_SIZE;
use crate::model::{
    Color, EdgeAxis, Floor, NodeId, NodeType, NodeTypeColors, Project, UnknownNodeType,
};
use crate::naming::{assign_missing_names, canonical_name};

pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    /// `0` for documents written before the field existed.
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_format: String,
    #[serde(default = "default_node_size")]
    pub node_size: f64,
    #[serde(default)]
    pub node_type_colors: Vec<ColorJson>,
    #[serde(default)]
    pub floors: Vec<FloorJson>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorJson {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorJson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub img_name: String,
    #[serde(default)]
    pub nodes: Vec<NodeJson>,
    #[serde(default)]
    pub edges: Vec<EdgeJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeJson {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(rename = "type")]
    pub node_type: u8,
    #[serde(default)]
    pub building_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub additional: String,
    #[serde(default)]
    pub assigned_name: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeJson {
    pub node_a: String,
    pub node_b: String,
    #[serde(default)]
    pub direction: EdgeAxisJson,
    #[serde(default = "default_true")]
    pub accessible: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(default = "default_true")]
    pub a_to_b: bool,
    #[serde(default = "default_true")]
    pub b_to_a: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeAxisJson {
    #[default]
    LeftRight,
    UpDown,
}

impl From<EdgeAxis> for EdgeAxisJson {
    fn from(axis: EdgeAxis) -> Self {
        match axis {
            EdgeAxis::LeftRight => Self::LeftRight,
            EdgeAxis::UpDown => Self::UpDown,
        }
    }
}

impl From<EdgeAxisJson> for EdgeAxis {
    fn from(axis: EdgeAxisJson) -> Self {
        match axis {
            EdgeAxisJson::LeftRight => Self::LeftRight,
            EdgeAxisJson::UpDown => Self::UpDown,
        }
    }
}

impl From<Color> for ColorJson {
    fn from(color: Color) -> Self {
        Self { r: color.r, g: color.g, b: color.b }
    }
}

impl From<ColorJson> for Color {
    fn from(color: ColorJson) -> Self {
        Color::new(color.r, color.g, color.b)
    }
}

fn default_node_size() -> f64 {
    DEFAULT_NODE_SIZE
}

fn default_true() -> bool {
    true
}

#[derive(Debug)]
pub enum DocumentError {
    Json(serde_json::Error),
    UnsupportedVersion { version: u32 },
    NoFloors,
    UnknownNodeType { floor: usize, node: usize, source: UnknownNodeType },
    MissingNode { floor: usize, name: String },
    AmbiguousNode { floor: usize, name: String },
    SelfLoop { floor: usize, name: String },
    DuplicateEdge { floor: usize, node_a: String, node_b: String },
    Connectivity { floor: usize, node_a: String, node_b: String, source: ConnectivityError },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "malformed project document: {source}"),
            Self::UnsupportedVersion { version } => write!(
                f,
                "unsupported project document version {version} (newest known is {DOCUMENT_VERSION})"
            ),
            Self::NoFloors => f.write_str("project document has no floors"),
            Self::UnknownNodeType { floor, node, source } => {
                write!(f, "floor {floor}, node {node}: {source}")
            }
            Self::MissingNode { floor, name } => {
                write!(f, "edge references unknown node {name:?} on floor {floor}")
            }
            Self::AmbiguousNode { floor, name } => {
                write!(f, "more than one node is named {name:?} on floor {floor}")
            }
            Self::SelfLoop { floor, name } => {
                write!(f, "edge connects node {name:?} to itself on floor {floor}")
            }
            Self::DuplicateEdge { floor, node_a, node_b } => {
                write!(f, "nodes {node_a:?} and {node_b:?} are connected twice on floor {floor}")
            }
            Self::Connectivity { floor, node_a, node_b, source } => {
                write!(f, "invalid edge {node_a}-{node_b} on floor {floor}: {source}")
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            Self::UnknownNodeType { source, .. } => Some(source),
            Self::Connectivity { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source)
    }
}

/// Builds the on-disk document.
///
/// Unnamed nodes get synthesized names on a copy of the project, so `project` itself is not
/// touched. Fails when an edge endpoint's canonical name is shared by another node on the same
/// floor, since the edge could not be resolved on load.
pub fn to_project_document(project: &Project) -> Result<ProjectDocument, DocumentError> {
    let mut named = project.clone();
    assign_missing_names(&mut named);

    let mut floors = Vec::with_capacity(named.floors().len());
    for (floor_index, floor) in named.floors().iter().enumerate() {
        floors.push(floor_to_json(floor_index, floor)?);
    }

    Ok(ProjectDocument {
        version: DOCUMENT_VERSION,
        project_name: named.name().to_owned(),
        project_format: named.format().to_owned(),
        node_size: named.node_size(),
        node_type_colors: named
            .node_type_colors()
            .iter()
            .map(|(_, color)| ColorJson::from(color))
            .collect(),
        floors,
    })
}

fn floor_to_json(floor_index: usize, floor: &Floor) -> Result<FloorJson, DocumentError> {
    let names = floor
        .nodes()
        .iter()
        .map(|node| (node.node_id(), canonical_name(node)))
        .collect::<HashMap<_, _>>();
    let mut usage = HashMap::<&str, usize>::new();
    for name in names.values() {
        *usage.entry(name.as_str()).or_default() += 1;
    }

    let endpoint_name = |node_id: NodeId| -> Result<String, DocumentError> {
        let Some(name) = names.get(&node_id) else {
            let name = node_id.to_string();
            return Err(DocumentError::MissingNode { floor: floor_index, name });
        };
        if usage.get(name.as_str()).copied().unwrap_or_default() > 1 {
            return Err(DocumentError::AmbiguousNode { floor: floor_index, name: name.clone() });
        }
        Ok(name.clone())
    };

    let mut edges = Vec::with_capacity(floor.edges().len());
    for edge in floor.edges() {
        edges.push(EdgeJson {
            node_a: endpoint_name(edge.node_a())?,
            node_b: endpoint_name(edge.node_b())?,
            direction: edge.axis().into(),
            accessible: edge.accessible(),
            closed: edge.closed(),
            a_to_b: edge.a_to_b(),
            b_to_a: edge.b_to_a(),
        });
    }

    Ok(FloorJson {
        name: floor.name().to_owned(),
        img_name: floor.image_name().to_owned(),
        nodes: floor
            .nodes()
            .iter()
            .map(|node| NodeJson {
                x: node.x(),
                y: node.y(),
                node_type: node.node_type().tag(),
                building_id: node.building_id().to_owned(),
                name: node.name().to_owned(),
                additional: node.additional().to_owned(),
                assigned_name: node.assigned_name(),
            })
            .collect(),
        edges,
    })
}

/// Rebuilds a project from its document. Nothing is returned unless every floor, node and edge
/// is valid.
pub fn from_project_document(document: ProjectDocument) -> Result<Project, DocumentError> {
    if document.version > DOCUMENT_VERSION {
        return Err(DocumentError::UnsupportedVersion { version: document.version });
    }

    let mut floors = Vec::with_capacity(document.floors.len());
    for (floor_index, floor_json) in document.floors.into_iter().enumerate() {
        floors.push(floor_from_json(floor_index, floor_json)?);
    }

    let mut project =
        Project::with_floors(document.project_name, floors).ok_or(DocumentError::NoFloors)?;
    project.set_format(document.project_format);
    project.set_node_size(document.node_size);

    // Older palettes may be shorter than the current type list; missing entries keep defaults.
    let mut colors = NodeTypeColors::default();
    for (node_type, color) in NodeType::ALL.into_iter().zip(document.node_type_colors) {
        colors.set(node_type, color.into());
    }
    project.set_node_type_colors(colors);

    Ok(project)
}

fn floor_from_json(floor_index: usize, floor_json: FloorJson) -> Result<Floor, DocumentError> {
    let mut floor = Floor::new(floor_json.name);
    floor.set_image_name(floor_json.img_name);

    let mut by_name = HashMap::<String, Vec<NodeId>>::new();
    for (node_index, node_json) in floor_json.nodes.into_iter().enumerate() {
        let node_type = NodeType::from_tag(node_json.node_type).map_err(|source| {
            DocumentError::UnknownNodeType { floor: floor_index, node: node_index, source }
        })?;
        let node_id = floor.insert_node(node_json.x, node_json.y, node_type);
        let Some(node) = floor.node_mut(node_id) else {
            continue;
        };
        node.set_building_id(node_json.building_id);
        node.set_name(node_json.name);
        node.set_additional(node_json.additional);
        node.restore_assigned_flag(node_json.assigned_name);
        by_name.entry(canonical_name(node)).or_default().push(node_id);
    }

    let resolve = |name: &str| -> Result<NodeId, DocumentError> {
        match by_name.get(name).map(Vec::as_slice) {
            Some([node_id]) => Ok(*node_id),
            Some([_, _, ..]) => {
                Err(DocumentError::AmbiguousNode { floor: floor_index, name: name.to_owned() })
            }
            _ => Err(DocumentError::MissingNode { floor: floor_index, name: name.to_owned() }),
        }
    };

    for edge_json in floor_json.edges {
        let node_a = resolve(&edge_json.node_a)?;
        let node_b = resolve(&edge_json.node_b)?;
        if node_a == node_b {
            return Err(DocumentError::SelfLoop { floor: floor_index, name: edge_json.node_a });
        }
        if floor.edge_between(node_a, node_b).is_some() {
            return Err(DocumentError::DuplicateEdge {
                floor: floor_index,
                node_a: edge_json.node_a,
                node_b: edge_json.node_b,
            });
        }
        let (Some(a), Some(b)) = (floor.node(node_a), floor.node(node_b)) else {
            return Err(DocumentError::MissingNode { floor: floor_index, name: edge_json.node_a });
        };
        if let Err(source) = check_pair(a.node_type(), b.node_type()) {
            return Err(DocumentError::Connectivity {
                floor: floor_index,
                node_a: edge_json.node_a,
                node_b: edge_json.node_b,
                source,
            });
        }

        let edge_id = floor.insert_edge(node_a, node_b);
        if let Some(edge) = floor.edge_mut(edge_id) {
            edge.set_axis(edge_json.direction.into());
            edge.set_accessible(edge_json.accessible);
            edge.set_closed(edge_json.closed);
            edge.set_a_to_b(edge_json.a_to_b);
            edge.set_b_to_a(edge_json.b_to_a);
        }
    }

    // Synthesized names only exist on disk so edges can be resolved.
    for node in floor.nodes_mut() {
        node.clear_assigned_name();
    }

    Ok(floor)
}

/// Pretty-printed document text, newline-terminated.
pub fn to_json_string(project: &Project) -> Result<String, DocumentError> {
    let document = to_project_document(project)?;
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    Ok(text)
}

pub fn from_json_str(text: &str) -> Result<Project, DocumentError> {
    let document = serde_json::from_str::<ProjectDocument>(text)?;
    from_project_document(document)
}
