// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over floors and projects.
//!
//! Queries back the editor's hit-testing (selection, edge endpoint binding) and node lookup.

pub mod search;
pub mod spatial;

pub use search::{node_search, NodeSearchMode};
pub use spatial::{find_nearest_edge, find_nearest_node, hit_test, Hit};
