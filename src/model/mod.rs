// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A project holds an ordered list of floors; each floor owns its nodes and the edges between
//! them. Edges refer to their endpoints by per-floor [`NodeId`].

pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod floor;
pub mod ids;
pub mod node;
pub mod node_type;
pub mod project;

pub use edge::{Edge, EdgeAxis};
pub use floor::Floor;
pub use ids::{EdgeId, Id, NodeId};
pub use node::Node;
pub use node_type::{Color, NodeType, NodeTypeColors, UnknownNodeType};
pub use project::Project;
