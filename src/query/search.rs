// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::model::{Node, Project};
use crate::naming::canonical_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSearchMode {
    Substring,
    Regex,
}

/// Finds nodes whose canonical name matches `needle`, in floor order then insertion order.
///
/// Returns `(floor_index, node)` pairs.
pub fn node_search<'a>(
    project: &'a Project,
    needle: &str,
    mode: NodeSearchMode,
    case_insensitive: bool,
) -> Result<Vec<(usize, &'a Node)>, regex::Error> {
    let all_nodes = project
        .floors()
        .iter()
        .enumerate()
        .flat_map(|(index, floor)| floor.nodes().iter().map(move |node| (index, node)));

    match mode {
        NodeSearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Ok(all_nodes
                    .filter(|(_, node)| canonical_name(node).to_lowercase().contains(&needle_lower))
                    .collect())
            } else {
                Ok(all_nodes.filter(|(_, node)| canonical_name(node).contains(needle)).collect())
            }
        }
        NodeSearchMode::Regex => {
            let regex = RegexBuilder::new(needle).case_insensitive(case_insensitive).build()?;
            Ok(all_nodes.filter(|(_, node)| regex.is_match(&canonical_name(node))).collect())
        }
    }
}
