// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text exports consumed by the routing system.
//!
//! Every export first gives unnamed nodes a synthesized name, orients every edge canonically and
//! re-checks the connectivity policy, so the project passed in is updated in place.

use std::collections::HashMap;
use std::fmt;

use crate::connectivity::{check_pair, ConnectivityError};
use crate::geometry::Point;
use crate::model::{Edge, EdgeAxis, EdgeId, NodeType, Project};
use crate::naming::{assign_missing_names, canonical_name, canonicalize_edges};

pub const SECTION_FORMAT: &str = "[FORMAT]";
pub const SECTION_EDGES: &str = "[EDGES]";
pub const SECTION_NODES: &str = "[NODES]";
pub const SECTION_EXCLUDED: &str = "[EXCLUDED]";
pub const SECTION_STREETS: &str = "[STREETS]";

/// Which nodes the node export emits besides streets and intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeExportMode {
    #[default]
    Streets,
    /// Also emits every door as `name|x,y`, the layout older routing builds expected.
    LegacyDoors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub node_mode: NodeExportMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    Connectivity { floor: usize, node_a: String, node_b: String, source: ConnectivityError },
    DanglingEdge { floor: usize, edge_id: EdgeId },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connectivity { floor, node_a, node_b, source } => {
                write!(f, "invalid edge {node_a}-{node_b} on floor {floor}: {source}")
            }
            Self::DanglingEdge { floor, edge_id } => {
                write!(f, "edge {edge_id} on floor {floor} references a missing node")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connectivity { source, .. } => Some(source),
            Self::DanglingEdge { .. } => None,
        }
    }
}

/// `name|other:letter:distance:accessible,...`, one line per node with outgoing travel.
pub fn export_edges(project: &mut Project) -> Result<String, ExportError> {
    let edges = prepare(project)?;
    Ok(render_edges(&edges))
}

/// Street and intersection payloads followed by the `[STREETS]` name table.
pub fn export_nodes(project: &mut Project, options: &ExportOptions) -> Result<String, ExportError> {
    prepare(project)?;
    Ok(render_nodes(project, options))
}

/// `nameA-nameB` for every closed edge.
pub fn export_excluded(project: &mut Project) -> Result<String, ExportError> {
    let edges = prepare(project)?;
    Ok(render_excluded(&edges))
}

/// The combined manifest: format hint plus the three exports under their section markers.
pub fn export_all(project: &mut Project, options: &ExportOptions) -> Result<String, ExportError> {
    let edges = prepare(project)?;

    let mut out = String::new();
    out.push_str(SECTION_FORMAT);
    out.push('\n');
    out.push_str(project.format());
    out.push('\n');
    out.push_str(SECTION_EDGES);
    out.push('\n');
    out.push_str(&render_edges(&edges));
    out.push_str(SECTION_NODES);
    out.push('\n');
    out.push_str(&render_nodes(project, options));
    out.push_str(SECTION_EXCLUDED);
    out.push('\n');
    out.push_str(&render_excluded(&edges));
    Ok(out)
}

/// An edge resolved to its endpoints' canonical names and positions.
#[derive(Debug, Clone)]
struct EdgeRow {
    name_a: String,
    name_b: String,
    pos_a: Point,
    pos_b: Point,
    axis: EdgeAxis,
    accessible: bool,
    closed: bool,
    a_to_b: bool,
    b_to_a: bool,
}

fn prepare(project: &mut Project) -> Result<Vec<EdgeRow>, ExportError> {
    assign_missing_names(project);
    canonicalize_edges(project);

    let mut rows = Vec::new();
    for (floor_index, floor) in project.floors().iter().enumerate() {
        for edge in floor.edges() {
            let (Some(a), Some(b)) = (floor.node(edge.node_a()), floor.node(edge.node_b())) else {
                let edge_id = edge.edge_id();
                return Err(ExportError::DanglingEdge { floor: floor_index, edge_id });
            };
            check_pair(a.node_type(), b.node_type()).map_err(|source| {
                ExportError::Connectivity {
                    floor: floor_index,
                    node_a: canonical_name(a),
                    node_b: canonical_name(b),
                    source,
                }
            })?;
            let (name_a, name_b) = (canonical_name(a), canonical_name(b));
            rows.push(edge_row(edge, name_a, name_b, a.position(), b.position()));
        }
    }

    rows.sort_by_cached_key(|row| (row.name_a.to_lowercase(), row.name_b.to_lowercase()));
    Ok(rows)
}

fn edge_row(edge: &Edge, name_a: String, name_b: String, pos_a: Point, pos_b: Point) -> EdgeRow {
    EdgeRow {
        name_a,
        name_b,
        pos_a,
        pos_b,
        axis: edge.axis(),
        accessible: edge.accessible(),
        closed: edge.closed(),
        a_to_b: edge.a_to_b(),
        b_to_a: edge.b_to_a(),
    }
}

fn render_edges(rows: &[EdgeRow]) -> String {
    // Lines keep the order in which their source node is first seen in the sorted edge list.
    let mut order: Vec<&str> = Vec::new();
    let mut adjacency: HashMap<&str, Vec<String>> = HashMap::new();

    for row in rows {
        let distance = format_distance(row.pos_a.distance_to(row.pos_b));
        let accessible = if row.accessible { 'T' } else { 'F' };
        if row.a_to_b {
            let letter = row.axis.letter(row.pos_a, row.pos_b);
            let entry = format!("{}:{letter}:{distance}:{accessible}", row.name_b);
            adjacency
                .entry(row.name_a.as_str())
                .or_insert_with(|| {
                    order.push(row.name_a.as_str());
                    Vec::new()
                })
                .push(entry);
        }
        if row.b_to_a {
            let letter = row.axis.letter(row.pos_b, row.pos_a);
            let entry = format!("{}:{letter}:{distance}:{accessible}", row.name_a);
            adjacency
                .entry(row.name_b.as_str())
                .or_insert_with(|| {
                    order.push(row.name_b.as_str());
                    Vec::new()
                })
                .push(entry);
        }
    }

    let mut out = String::new();
    for name in order {
        out.push_str(name);
        out.push('|');
        if let Some(entries) = adjacency.get(name) {
            out.push_str(&entries.join(","));
        }
        out.push('\n');
    }
    out
}

/// Two decimals. Exact halves round away from zero (`3.125` is `3.13`), matching the exports
/// the navigation app already reads.
fn format_distance(distance: f64) -> String {
    let scaled = distance * 100.0;
    if scaled.fract().abs() == 0.5 {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{distance:.2}")
    }
}

fn render_nodes(project: &Project, options: &ExportOptions) -> String {
    let mut out = String::new();

    if options.node_mode == NodeExportMode::LegacyDoors {
        for node in project.floors().iter().flat_map(|floor| floor.nodes()) {
            if node.node_type() == NodeType::Door {
                out.push_str(&format!("{}|{},{}\n", canonical_name(node), node.x(), node.y()));
            }
        }
    }

    let mut streets = StreetTable::default();
    for node in project.floors().iter().flat_map(|floor| floor.nodes()) {
        if !matches!(node.node_type(), NodeType::Street | NodeType::Intersection) {
            continue;
        }
        out.push_str(&canonical_name(node));
        out.push('|');
        out.push_str(&streets.encode_groups(node.additional()));
        out.push('\n');
    }

    out.push_str(SECTION_STREETS);
    out.push('\n');
    for (index, name) in streets.sorted_by_name() {
        out.push_str(&format!("{index}|{name}\n"));
    }
    out
}

fn render_excluded(rows: &[EdgeRow]) -> String {
    let mut out = String::new();
    for row in rows.iter().filter(|row| row.closed) {
        out.push_str(&row.name_a);
        out.push('-');
        out.push_str(&row.name_b);
        out.push('\n');
    }
    out
}

/// Deduplicated street names; the first occurrence of a name gets the next index.
#[derive(Debug, Default)]
struct StreetTable {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl StreetTable {
    fn index_of(&mut self, name: &str) -> usize {
        if let Some(index) = self.indices.get(name) {
            return *index;
        }
        let index = self.names.len();
        self.names.push(name.to_owned());
        self.indices.insert(name.to_owned(), index);
        index
    }

    /// Rewrites `Main:Elm,Oak` as `0:1,2`. Names are trimmed and empty names dropped.
    fn encode_groups(&mut self, additional: &str) -> String {
        if additional.trim().is_empty() {
            return String::new();
        }
        additional
            .split(',')
            .map(|group| {
                group
                    .split(':')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| self.index_of(name).to_string())
                    .collect::<Vec<_>>()
                    .join(":")
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn sorted_by_name(&self) -> Vec<(usize, &str)> {
        let mut entries = self
            .names
            .iter()
            .enumerate()
            .map(|(index, name)| (index, name.as_str()))
            .collect::<Vec<_>>();
        entries.sort_by(|left, right| left.1.cmp(right.1));
        entries
    }
}
