// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Floor/node/edge mutation helpers used by `apply_ops` and the single-op shortcuts.
/// Every helper validates before it mutates, so a failed call leaves `floors` unchanged.
fn apply_floor_op(
    floors: &mut Vec<Floor>,
    op: &FloorOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        FloorOp::Add { name } => {
            floors.push(Floor::new(default_floor_name(name)));
            delta.record_added(ElementRef::Floor { index: floors.len() - 1 });
            Ok(())
        }
        FloorOp::Rename { floor, name } => {
            floor_mut(floors, *floor)?.set_name(name.clone());
            delta.record_updated(ElementRef::Floor { index: *floor });
            Ok(())
        }
        FloorOp::SetImage { floor, image_name } => {
            floor_mut(floors, *floor)?.set_image_name(image_name.clone());
            delta.record_updated(ElementRef::Floor { index: *floor });
            Ok(())
        }
        FloorOp::Move { floor, direction } => {
            let new_index = move_floor_in(floors, *floor, *direction)?;
            delta.record_updated(ElementRef::Floor { index: *floor });
            delta.record_updated(ElementRef::Floor { index: new_index });
            Ok(())
        }
        FloorOp::Delete { floor } => {
            delete_floor_in(floors, *floor)?;
            delta.record_removed(ElementRef::Floor { index: *floor });
            Ok(())
        }
    }
}

fn apply_node_op(
    floors: &mut [Floor],
    op: &NodeOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        NodeOp::Add { floor, x, y, node_type } => {
            let node_id = floor_mut(floors, *floor)?.insert_node(*x, *y, *node_type);
            delta.record_added(ElementRef::Node { floor: *floor, node_id });
            Ok(())
        }
        NodeOp::Update { floor, node_id, patch } => {
            update_node_in(floors, *floor, *node_id, patch)?;
            delta.record_updated(ElementRef::Node { floor: *floor, node_id: *node_id });
            Ok(())
        }
        NodeOp::Remove { floor, node_id } => {
            let removed_edges = remove_node_in(floors, *floor, *node_id)?;
            for edge_id in removed_edges {
                delta.record_removed(ElementRef::Edge { floor: *floor, edge_id });
            }
            delta.record_removed(ElementRef::Node { floor: *floor, node_id: *node_id });
            Ok(())
        }
    }
}

fn apply_edge_op(
    floors: &mut [Floor],
    op: &EdgeOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        EdgeOp::Add { floor, node_a, node_b } => {
            let edge_id = add_edge_in(floors, *floor, *node_a, *node_b)?;
            delta.record_added(ElementRef::Edge { floor: *floor, edge_id });
            Ok(())
        }
        EdgeOp::Update { floor, edge_id, patch } => {
            update_edge_in(floors, *floor, *edge_id, patch)?;
            delta.record_updated(ElementRef::Edge { floor: *floor, edge_id: *edge_id });
            Ok(())
        }
        EdgeOp::Remove { floor, edge_id } => {
            remove_edge_in(floors, *floor, *edge_id)?;
            delta.record_removed(ElementRef::Edge { floor: *floor, edge_id: *edge_id });
            Ok(())
        }
    }
}

fn floor_ref(floors: &[Floor], floor: usize) -> Result<&Floor, ApplyError> {
    floors.get(floor).ok_or(ApplyError::FloorNotFound { floor })
}

fn floor_mut(floors: &mut [Floor], floor: usize) -> Result<&mut Floor, ApplyError> {
    floors.get_mut(floor).ok_or(ApplyError::FloorNotFound { floor })
}

fn move_floor_in(
    floors: &mut [Floor],
    floor: usize,
    direction: MoveDirection,
) -> Result<usize, ApplyError> {
    floor_ref(floors, floor)?;
    let target = match direction {
        MoveDirection::Up => floor.checked_sub(1),
        MoveDirection::Down => Some(floor + 1).filter(|index| *index < floors.len()),
    };
    let Some(target) = target else {
        return Err(ApplyError::FloorMoveOutOfRange { floor, direction });
    };
    floors.swap(floor, target);
    Ok(target)
}

fn delete_floor_in(floors: &mut Vec<Floor>, floor: usize) -> Result<Floor, ApplyError> {
    floor_ref(floors, floor)?;
    if floors.len() == 1 {
        return Err(ApplyError::LastFloor);
    }
    Ok(floors.remove(floor))
}

fn update_node_in(
    floors: &mut [Floor],
    floor: usize,
    node_id: NodeId,
    patch: &NodePatch,
) -> Result<(), ApplyError> {
    let Some(node) = floor_mut(floors, floor)?.node_mut(node_id) else {
        return Err(ApplyError::NodeNotFound { floor, node_id });
    };

    let x = patch.x.unwrap_or(node.x());
    let y = patch.y.unwrap_or(node.y());
    node.set_position(x, y);
    if let Some(node_type) = patch.node_type {
        node.set_node_type(node_type);
    }
    if let Some(building_id) = &patch.building_id {
        node.set_building_id(building_id.clone());
    }
    if let Some(name) = &patch.name {
        node.set_name(name.clone());
    }
    if let Some(additional) = &patch.additional {
        node.set_additional(additional.clone());
    }
    Ok(())
}

fn remove_node_in(
    floors: &mut [Floor],
    floor: usize,
    node_id: NodeId,
) -> Result<Vec<EdgeId>, ApplyError> {
    floor_mut(floors, floor)?
        .remove_node(node_id)
        .ok_or(ApplyError::NodeNotFound { floor, node_id })
}

fn add_edge_in(
    floors: &mut [Floor],
    floor: usize,
    node_a: NodeId,
    node_b: NodeId,
) -> Result<EdgeId, ApplyError> {
    let target = floor_mut(floors, floor)?;
    if node_a == node_b {
        return Err(ApplyError::SelfLoop { floor, node_id: node_a });
    }

    let type_a = target
        .node(node_a)
        .map(|node| node.node_type())
        .ok_or(ApplyError::NodeNotFound { floor, node_id: node_a })?;
    let type_b = target
        .node(node_b)
        .map(|node| node.node_type())
        .ok_or(ApplyError::NodeNotFound { floor, node_id: node_b })?;

    if let Some(existing) = target.edge_between(node_a, node_b) {
        return Err(ApplyError::DuplicateEdge { floor, existing: existing.edge_id() });
    }
    check_pair(type_a, type_b).map_err(|source| ApplyError::Connectivity { floor, source })?;

    Ok(target.insert_edge(node_a, node_b))
}

fn update_edge_in(
    floors: &mut [Floor],
    floor: usize,
    edge_id: EdgeId,
    patch: &EdgePatch,
) -> Result<(), ApplyError> {
    let Some(edge) = floor_mut(floors, floor)?.edge_mut(edge_id) else {
        return Err(ApplyError::EdgeNotFound { floor, edge_id });
    };

    if let Some(axis) = patch.axis {
        edge.set_axis(axis);
    }
    if let Some(accessible) = patch.accessible {
        edge.set_accessible(accessible);
    }
    if let Some(closed) = patch.closed {
        edge.set_closed(closed);
    }
    if let Some(a_to_b) = patch.a_to_b {
        edge.set_a_to_b(a_to_b);
    }
    if let Some(b_to_a) = patch.b_to_a {
        edge.set_b_to_a(b_to_a);
    }
    Ok(())
}

fn remove_edge_in(floors: &mut [Floor], floor: usize, edge_id: EdgeId) -> Result<(), ApplyError> {
    floor_mut(floors, floor)?
        .remove_edge(edge_id)
        .map(|_| ())
        .ok_or(ApplyError::EdgeNotFound { floor, edge_id })
}
