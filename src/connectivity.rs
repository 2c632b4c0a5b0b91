// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Which node types may be linked by an edge.
//!
//! The table is directional and not symmetric by construction. An edge is only valid when both
//! `can_connect(a, b)` and `can_connect(b, a)` hold; use [`check_pair`] at every site that
//! creates or validates an edge.

use std::fmt;

use crate::model::{NodeType, UnknownNodeType};

pub fn can_connect(from: NodeType, to: NodeType) -> bool {
    use NodeType::*;

    match from {
        Door => matches!(to, Hallway | Path | Street),
        Stairs | Elevator | Room => matches!(to, Hallway),
        Hallway => matches!(to, Door | Stairs | Elevator | Hallway | Room),
        Street | Path => matches!(to, Door | Street | Path | Intersection),
        Intersection => matches!(to, Street | Path | Intersection),
    }
}

/// [`can_connect`] over raw document tags. Unknown tags are an error, never a default answer.
pub fn can_connect_tags(from: u8, to: u8) -> Result<bool, UnknownNodeType> {
    Ok(can_connect(NodeType::from_tag(from)?, NodeType::from_tag(to)?))
}

/// Checks the pair in both directions.
pub fn check_pair(first: NodeType, second: NodeType) -> Result<(), ConnectivityError> {
    if can_connect(first, second) && can_connect(second, first) {
        Ok(())
    } else {
        Err(ConnectivityError { first, second })
    }
}

/// Two node types that may not share an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityError {
    first: NodeType,
    second: NodeType,
}

impl ConnectivityError {
    pub fn first(&self) -> NodeType {
        self.first
    }

    pub fn second(&self) -> NodeType {
        self.second
    }
}

impl fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot connect node types {} and {}", self.first, self.second)
    }
}

impl std::error::Error for ConnectivityError {}
