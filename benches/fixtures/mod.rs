// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use floorgraph::model::{NodeId, NodeType, Project};
use floorgraph::ops::{add_edge, add_floor, add_node, update_node, NodePatch};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("floorgraph_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub mod campus {
    use super::*;

    const BUILDING_SPACING: f64 = 400.0;
    const HALL_SPACING: f64 = 8.0;
    const ROOM_OFFSET: f64 = 6.0;
    const STREET_Y: f64 = -60.0;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub buildings: usize,
        pub floors: usize,
        pub hallways_per_floor: usize,
        pub rooms_per_hallway: usize,
    }

    impl Params {
        pub const fn new(
            buildings: usize,
            floors: usize,
            hallways_per_floor: usize,
            rooms_per_hallway: usize,
        ) -> Self {
            Self { buildings, floors, hallways_per_floor, rooms_per_hallway }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        Large,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::Large => "large",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(2, 2, 10, 2),
                Self::Medium => Params::new(6, 4, 25, 3),
                Self::Large => Params::new(12, 8, 40, 4),
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn node(
        project: &mut Project,
        floor: usize,
        x: f64,
        y: f64,
        node_type: NodeType,
        building: Option<usize>,
        name: Option<String>,
        additional: Option<String>,
    ) -> NodeId {
        let node_id = add_node(project, floor, x, y, node_type).expect("bench node");
        let patch = NodePatch {
            building_id: building.map(|building| building.to_string()),
            name,
            additional,
            ..NodePatch::default()
        };
        update_node(project, floor, node_id, &patch).expect("bench node patch");
        node_id
    }

    /// Deterministic campus generator.
    ///
    /// - Each building floor is a hallway corridor with rooms hanging off every hallway node and
    ///   a stair node at the corridor end; stairs share a name across floors.
    /// - Ground floors get a door at the corridor start, wired to a street node on a shared
    ///   street with an intersection between buildings.
    /// - Hallways are left unnamed so exports exercise name synthesis.
    pub fn build(params: Params) -> Project {
        assert!(params.buildings >= 1, "buildings must be >= 1");
        assert!(params.floors >= 1, "floors must be >= 1");
        assert!(params.hallways_per_floor >= 1, "hallways_per_floor must be >= 1");

        let mut project = Project::new("Campus");
        project.set_format("bench");
        for floor in 1..params.floors {
            add_floor(&mut project, format!("Level {floor}"));
        }

        let mut previous_street = None;
        for building in 0..params.buildings {
            let origin_x = building as f64 * BUILDING_SPACING;

            for floor in 0..params.floors {
                let mut previous_hall = None;
                for idx in 0..params.hallways_per_floor {
                    let x = origin_x + idx as f64 * HALL_SPACING;
                    let hall = node(
                        &mut project,
                        floor,
                        x,
                        0.0,
                        NodeType::Hallway,
                        Some(building),
                        None,
                        None,
                    );
                    if let Some(previous) = previous_hall {
                        add_edge(&mut project, floor, previous, hall).expect("corridor edge");
                    }
                    previous_hall = Some(hall);

                    for room in 0..params.rooms_per_hallway {
                        let side = if room % 2 == 0 { 1.0 } else { -1.0 };
                        let y = side * ROOM_OFFSET * (1 + room / 2) as f64;
                        let name = format!("{floor}{idx:02}{room}");
                        let room_id = node(
                            &mut project,
                            floor,
                            x,
                            y,
                            NodeType::Room,
                            Some(building),
                            Some(name),
                            None,
                        );
                        add_edge(&mut project, floor, hall, room_id).expect("room edge");
                    }
                }

                let stairs_x = origin_x + params.hallways_per_floor as f64 * HALL_SPACING;
                let stairs = node(
                    &mut project,
                    floor,
                    stairs_x,
                    0.0,
                    NodeType::Stairs,
                    Some(building),
                    Some("A".to_owned()),
                    None,
                );
                if let Some(last_hall) = previous_hall {
                    add_edge(&mut project, floor, last_hall, stairs).expect("stairs edge");
                }
            }

            let first_hall = project.floors()[0]
                .nodes()
                .iter()
                .find(|node| {
                    node.node_type() == NodeType::Hallway
                        && node.building_id() == building.to_string()
                })
                .map(|node| node.node_id())
                .expect("first hallway");
            let door = node(
                &mut project,
                0,
                origin_x - HALL_SPACING,
                0.0,
                NodeType::Door,
                Some(building),
                Some("Main".to_owned()),
                None,
            );
            add_edge(&mut project, 0, door, first_hall).expect("door edge");

            let street = node(
                &mut project,
                0,
                origin_x - HALL_SPACING,
                STREET_Y,
                NodeType::Street,
                None,
                Some(format!("S{building:03}")),
                Some(format!("Main St:Av {building}")),
            );
            add_edge(&mut project, 0, door, street).expect("street edge");

            if let Some(previous) = previous_street {
                let corner = node(
                    &mut project,
                    0,
                    origin_x - BUILDING_SPACING / 2.0,
                    STREET_Y,
                    NodeType::Intersection,
                    None,
                    Some(format!("X{building:03}")),
                    Some(format!("Main St,Av {building}")),
                );
                add_edge(&mut project, 0, previous, corner).expect("street edge");
                add_edge(&mut project, 0, corner, street).expect("street edge");
            }
            previous_street = Some(street);
        }

        project
    }

    pub fn fixture(case: Case) -> Project {
        build(case.params())
    }
}
