// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Project files on disk.
//!
//! Loads and saves the JSON project document and writes the routing exports next to each other.
//! All writes go through a temp file and a rename, so readers never see a half-written file.

pub mod project_file;

pub use project_file::{ExportPaths, ProjectFile, StoreError, WriteDurability};
