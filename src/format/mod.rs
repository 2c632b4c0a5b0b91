// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Project document and routing exports.
//!
//! `document` is the JSON project file the editor saves and loads. `graph` renders the text
//! formats the routing system consumes.

pub mod document;
pub mod graph;

pub use document::{
    from_json_str, from_project_document, to_json_string, to_project_document, DocumentError,
    ProjectDocument, DOCUMENT_VERSION,
};
pub use graph::{
    export_all, export_edges, export_excluded, export_nodes, ExportError, ExportOptions,
    NodeExportMode,
};
