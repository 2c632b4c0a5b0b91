// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{discard_on_error, export_stem, ProjectFile, StoreError, WriteDurability};
use crate::format::{DocumentError, ExportError, ExportOptions, NodeExportMode};
use crate::model::fixtures::small_building;
use crate::model::{NodeType, Project};
use crate::ops::{add_node, update_node, NodePatch};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("floorgraph-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[fixture]
fn tmp() -> TempDir {
    TempDir::new("store")
}

fn leftover_temp_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(super::TMP_PREFIX))
        .count()
}

#[rstest]
#[case(WriteDurability::BestEffort)]
#[case(WriteDurability::Durable)]
fn saved_projects_load_back_unchanged(tmp: TempDir, #[case] durability: WriteDurability) {
    let project = small_building().project;
    let file = ProjectFile::new(tmp.path().join("campus.json")).with_durability(durability);

    file.save(&project).unwrap();
    let loaded = file.load().unwrap();

    assert_eq!(loaded, project);
    assert_eq!(file.durability(), durability);
    assert_eq!(leftover_temp_files(tmp.path()), 0);
    let text = fs::read_to_string(file.path()).unwrap();
    assert!(text.starts_with("{\n"));
    assert!(text.ends_with("}\n"));
}

#[rstest]
fn saving_overwrites_the_previous_file(tmp: TempDir) {
    let file = ProjectFile::new(tmp.path().join("nested").join("project.json"));
    let mut project = Project::new("Before");
    file.save(&project).unwrap();

    project.set_name("After");
    file.save(&project).unwrap();

    assert_eq!(file.load().unwrap().name(), "After");
}

#[rstest]
fn load_reports_missing_and_invalid_files(tmp: TempDir) {
    let missing = ProjectFile::new(tmp.path().join("missing.json"));
    assert!(matches!(missing.load(), Err(StoreError::Io { .. })));

    let path = tmp.path().join("broken.json");
    fs::write(&path, "{\"floors\": []}").unwrap();
    let err = ProjectFile::new(&path).load().unwrap_err();
    match err {
        StoreError::Document { path: reported, source } => {
            assert_eq!(reported, path);
            assert!(matches!(source, DocumentError::NoFloors));
        }
        other => panic!("expected Document, got: {other:?}"),
    }
}

#[rstest]
fn exports_land_in_four_files(tmp: TempDir) {
    let mut project = small_building().project;
    project.set_name("Main Hall");
    let extra = add_node(&mut project, 0, 40.0, 0.0, NodeType::Room).unwrap();
    let out_dir = tmp.path().join("out");
    let file = ProjectFile::new(tmp.path().join("main.json"));
    let options = ExportOptions { node_mode: NodeExportMode::LegacyDoors };

    let paths = file.write_exports(&mut project, &out_dir, &options).unwrap();

    assert_eq!(paths.edges, out_dir.join("Main Hall_edges.txt"));
    assert_eq!(paths.graph, out_dir.join("Main Hall_graph.txt"));
    let edges = fs::read_to_string(&paths.edges).unwrap();
    assert!(edges.starts_with("DMain|H1:R:10.00:T,TElm:L:20.00:T\n"));
    assert_eq!(fs::read_to_string(&paths.nodes).unwrap(), "DMain|0,0\nTElm|\n[STREETS]\n");
    assert_eq!(fs::read_to_string(&paths.excluded).unwrap(), "");
    let graph = fs::read_to_string(&paths.graph).unwrap();
    assert!(graph.contains(&format!("[EDGES]\n{edges}[NODES]\n")));
    assert_eq!(leftover_temp_files(&out_dir), 0);

    let named = project.floors()[0].node(extra).unwrap();
    assert_eq!(named.name(), "3");
    assert!(named.assigned_name());
}

#[rstest]
fn invalid_graphs_write_nothing(tmp: TempDir) {
    let fixture = small_building();
    let mut project = fixture.project;
    let patch = NodePatch { node_type: Some(NodeType::Elevator), ..NodePatch::default() };
    update_node(&mut project, 0, fixture.door, &patch).unwrap();
    let out_dir = tmp.path().join("out");

    let err = ProjectFile::new(tmp.path().join("p.json"))
        .write_exports(&mut project, &out_dir, &ExportOptions::default())
        .unwrap_err();

    assert!(matches!(err, StoreError::Export { source: ExportError::Connectivity { .. } }));
    assert!(!out_dir.exists());
}

#[rstest]
#[case("Campus", "Campus")]
#[case("", "project")]
#[case("  ", "project")]
#[case("North/South: Annex", "North_South_ Annex")]
#[case("..", "project")]
fn export_stems_are_file_name_safe(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(export_stem(name), expected);
}

#[rstest]
fn failed_temp_writes_are_removed(tmp: TempDir) {
    let tmp_path = tmp.path().join(format!("{}.main.json.1", super::TMP_PREFIX));
    fs::write(&tmp_path, b"{").unwrap();

    let err = discard_on_error(&tmp_path, Err(io::Error::new(io::ErrorKind::Other, "sync failed")))
        .unwrap_err();

    assert!(matches!(err, StoreError::Io { ref path, .. } if path == &tmp_path));
    assert!(!tmp_path.exists());
    assert_eq!(leftover_temp_files(tmp.path()), 0);
    assert!(discard_on_error(&tmp_path, Ok(())).is_ok());
}
