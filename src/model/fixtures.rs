// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{EdgeId, NodeId};
use super::node_type::NodeType;
use super::project::Project;

pub(crate) fn named_node(
    project: &mut Project,
    floor: usize,
    x: f64,
    y: f64,
    node_type: NodeType,
    name: &str,
) -> NodeId {
    let target = project.floor_mut(floor).expect("fixture floor");
    let node_id = target.insert_node(x, y, node_type);
    target.node_mut(node_id).expect("fixture node").set_name(name);
    node_id
}

pub(crate) fn edge(project: &mut Project, floor: usize, a: NodeId, b: NodeId) -> EdgeId {
    crate::ops::add_edge(project, floor, a, b).expect("fixture edge")
}

/// Ids of the nodes in [`small_building`].
pub(crate) struct SmallBuilding {
    pub(crate) project: Project,
    pub(crate) hall_west: NodeId,
    pub(crate) hall_east: NodeId,
    pub(crate) room: NodeId,
    pub(crate) door: NodeId,
    pub(crate) street: NodeId,
    pub(crate) hall_link: EdgeId,
    pub(crate) room_link: EdgeId,
    pub(crate) door_link: EdgeId,
    pub(crate) street_link: EdgeId,
}

/// One floor: two hallway nodes, a room, a door and the street outside.
///
/// ```text
///   street(0,-20)
///        |
///   door(0,0) -- hall_west(10,0) -- hall_east(30,0)
///                                       |
///                                  room(30,15)
/// ```
pub(crate) fn small_building() -> SmallBuilding {
    let mut project = Project::new("Fixture");
    project.floor_mut(0).expect("first floor").set_name("Ground");

    let hall_west = named_node(&mut project, 0, 10.0, 0.0, NodeType::Hallway, "1");
    let hall_east = named_node(&mut project, 0, 30.0, 0.0, NodeType::Hallway, "2");
    let room = named_node(&mut project, 0, 30.0, 15.0, NodeType::Room, "101");
    let door = named_node(&mut project, 0, 0.0, 0.0, NodeType::Door, "Main");
    let street = named_node(&mut project, 0, 0.0, -20.0, NodeType::Street, "Elm");

    let hall_link = edge(&mut project, 0, hall_west, hall_east);
    let room_link = edge(&mut project, 0, hall_east, room);
    let door_link = edge(&mut project, 0, door, hall_west);
    let street_link = edge(&mut project, 0, street, door);

    SmallBuilding {
        project,
        hall_west,
        hall_east,
        room,
        door,
        street,
        hall_link,
        room_link,
        door_link,
        street_link,
    }
}
