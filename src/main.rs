// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Floorgraph CLI entrypoint.
//!
//! Validates project files and writes the routing exports without opening the editor.

use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use floorgraph::format::{
    export_all, export_edges, export_excluded, export_nodes, ExportOptions, NodeExportMode,
};
use floorgraph::naming::clear_assigned_names;
use floorgraph::store::{ProjectFile, WriteDurability};

const LOG_ENV: &str = "FLOORGRAPH_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} export <project.json> [--out <dir>] [--legacy-doors] [--durable-writes]\n  {program} print <project.json> [--section edges|nodes|excluded|all] [--legacy-doors]\n  {program} check <project.json>\n\nexport writes <name>_edges.txt, <name>_nodes.txt, <name>_excluded.txt and <name>_graph.txt\ninto --out (default: the project file's directory).\n--legacy-doors also lists door coordinates in the node export.\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n\nSet {LOG_ENV} (e.g. {LOG_ENV}=debug) to control log output on stderr."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Command {
    #[default]
    Check,
    Export,
    Print,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Section {
    Edges,
    Nodes,
    Excluded,
    #[default]
    All,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    project: String,
    out_dir: Option<String>,
    section: Option<Section>,
    legacy_doors: bool,
    durable_writes: bool,
}

impl CliOptions {
    fn export_options(&self) -> ExportOptions {
        let node_mode =
            if self.legacy_doors { NodeExportMode::LegacyDoors } else { NodeExportMode::Streets };
        ExportOptions { node_mode }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions {
        command: match args.next().as_deref() {
            Some("export") => Command::Export,
            Some("print") => Command::Print,
            Some("check") => Command::Check,
            _ => return Err(()),
        },
        ..CliOptions::default()
    };
    let mut project = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                if options.command != Command::Export || options.out_dir.is_some() {
                    return Err(());
                }
                options.out_dir = Some(args.next().ok_or(())?);
            }
            "--section" => {
                if options.command != Command::Print || options.section.is_some() {
                    return Err(());
                }
                let section = match args.next().as_deref() {
                    Some("edges") => Section::Edges,
                    Some("nodes") => Section::Nodes,
                    Some("excluded") => Section::Excluded,
                    Some("all") => Section::All,
                    _ => return Err(()),
                };
                options.section = Some(section);
            }
            "--legacy-doors" => {
                if options.command == Command::Check || options.legacy_doors {
                    return Err(());
                }
                options.legacy_doors = true;
            }
            "--durable-writes" => {
                if options.command != Command::Export || options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if project.is_some() {
                    return Err(());
                }
                project = Some(arg);
            }
        }
    }

    options.project = project.ok_or(())?;
    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn default_out_dir(project: &Path) -> PathBuf {
    match project.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "floorgraph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let durability = if options.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };
        let file = ProjectFile::new(&options.project).with_durability(durability);
        let mut project = file.load()?;
        let export_options = options.export_options();

        match options.command {
            Command::Export => {
                let out_dir = options
                    .out_dir
                    .as_ref()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| default_out_dir(file.path()));
                let paths = file.write_exports(&mut project, &out_dir, &export_options)?;
                for path in [&paths.edges, &paths.nodes, &paths.excluded, &paths.graph] {
                    println!("{}", path.display());
                }
            }
            Command::Print => {
                clear_assigned_names(&mut project);
                let text = match options.section.unwrap_or_default() {
                    Section::Edges => export_edges(&mut project)?,
                    Section::Nodes => export_nodes(&mut project, &export_options)?,
                    Section::Excluded => export_excluded(&mut project)?,
                    Section::All => export_all(&mut project, &export_options)?,
                };
                print!("{text}");
            }
            Command::Check => {
                clear_assigned_names(&mut project);
                export_all(&mut project, &export_options)?;
                let floors = project.floors();
                let nodes = floors.iter().map(|floor| floor.nodes().len()).sum::<usize>();
                let edges = floors.iter().map(|floor| floor.edges().len()).sum::<usize>();
                info!(floors = floors.len(), nodes, edges, "project is valid");
                println!("ok: {} floors, {nodes} nodes, {edges} edges", floors.len());
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("floorgraph: {err}");
        std::process::exit(1);
    }
}
