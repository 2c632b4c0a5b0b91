// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Floorgraph: the graph editing and export engine behind a multi-floor building navigation
//! editor.
//!
//! Floors hold typed nodes (doors, stairs, hallways, rooms, streets, ...) and the edges between
//! them. The crate validates every edge against the node-type connectivity table, answers the
//! spatial queries the editor needs for selection, and turns the graph into the JSON project
//! document and the text exports a routing system consumes.

pub mod connectivity;
pub mod format;
pub mod geometry;
pub mod model;
pub mod naming;
pub mod ops;
pub mod query;
pub mod session;
pub mod store;
