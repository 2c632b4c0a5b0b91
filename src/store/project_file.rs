// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use crate::format::{
    export_all, export_edges, export_excluded, export_nodes, from_json_str, to_json_string,
    DocumentError, ExportError, ExportOptions,
};
use crate::model::Project;
use crate::naming::clear_assigned_names;

const TMP_PREFIX: &str = ".floorgraph.tmp";
const DEFAULT_EXPORT_STEM: &str = "project";

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Document { path: PathBuf, source: DocumentError },
    Export { source: ExportError },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Document { path, source } => write!(f, "project error at {path:?}: {source}"),
            Self::Export { source } => write!(f, "cannot export project: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Document { source, .. } => Some(source),
            Self::Export { source } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place, without fsync.
    #[default]
    BestEffort,

    /// Also flushes the file contents and the rename to stable storage where the platform
    /// allows it.
    Durable,
}

/// Where each export landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub edges: PathBuf,
    pub nodes: PathBuf,
    pub excluded: PathBuf,
    pub graph: PathBuf,
}

/// A project JSON file on disk.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl ProjectFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), durability: WriteDurability::default() }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Project, StoreError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        let project = from_json_str(&text)
            .map_err(|source| StoreError::Document { path: self.path.clone(), source })?;
        debug!(
            path = %self.path.display(),
            floors = project.floors().len(),
            "loaded project"
        );
        Ok(project)
    }

    pub fn save(&self, project: &Project) -> Result<(), StoreError> {
        let text = to_json_string(project)
            .map_err(|source| StoreError::Document { path: self.path.clone(), source })?;
        write_atomic(&self.path, text.as_bytes(), self.durability)
    }

    /// Writes the edge, node, excluded and combined exports into `out_dir`.
    ///
    /// Synthesized names are cleared first so every run names unnamed nodes from scratch; the
    /// names the export assigns stay on `project` afterwards.
    pub fn write_exports(
        &self,
        project: &mut Project,
        out_dir: &Path,
        options: &ExportOptions,
    ) -> Result<ExportPaths, StoreError> {
        clear_assigned_names(project);

        let edges = export_edges(project).map_err(|source| StoreError::Export { source })?;
        let nodes = export_nodes(project, options).map_err(|source| StoreError::Export { source })?;
        let excluded = export_excluded(project).map_err(|source| StoreError::Export { source })?;
        let graph = export_all(project, options).map_err(|source| StoreError::Export { source })?;

        fs::create_dir_all(out_dir)
            .map_err(|source| StoreError::Io { path: out_dir.to_path_buf(), source })?;

        let stem = export_stem(project.name());
        let paths = ExportPaths {
            edges: out_dir.join(format!("{stem}_edges.txt")),
            nodes: out_dir.join(format!("{stem}_nodes.txt")),
            excluded: out_dir.join(format!("{stem}_excluded.txt")),
            graph: out_dir.join(format!("{stem}_graph.txt")),
        };
        for (path, contents) in [
            (&paths.edges, &edges),
            (&paths.nodes, &nodes),
            (&paths.excluded, &excluded),
            (&paths.graph, &graph),
        ] {
            write_atomic(path, contents.as_bytes(), self.durability)?;
        }

        info!(out_dir = %out_dir.display(), stem = %stem, "exported project");
        Ok(paths)
    }
}

/// File-name-safe form of the project name.
fn export_stem(project_name: &str) -> String {
    let stem = project_name
        .trim()
        .chars()
        .map(|ch| match ch {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect::<String>();
    let stem = stem.trim_matches(['.', ' ']);
    if stem.is_empty() {
        DEFAULT_EXPORT_STEM.to_owned()
    } else {
        stem.to_owned()
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

/// Removes a temp file whose contents could not be written or synced.
fn discard_on_error(tmp_path: &Path, written: io::Result<()>) -> Result<(), StoreError> {
    written.map_err(|source| {
        let _ = fs::remove_file(tmp_path);
        StoreError::Io { path: tmp_path.to_path_buf(), source }
    })
}

/// Writes `contents` next to `path` under a temp name and renames it over `path`.
fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        });
    };

    fs::create_dir_all(parent)
        .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path =
        parent.join(format!("{TMP_PREFIX}.{}.{}", file_name.to_string_lossy(), nanos));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    let written = file.write_all(contents).and_then(|()| match durability {
        WriteDurability::Durable => file.sync_all(),
        WriteDurability::BestEffort => Ok(()),
    });
    drop(file);
    discard_on_error(&tmp_path, written)?;

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
            dir.sync_all()
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    debug!(path = %path.display(), bytes = contents.len(), ?durability, "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests;
