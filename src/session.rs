// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editing state on top of a [`Project`]: the floor being edited, the current selection and the
//! node type the next placed node gets.
//!
//! Every mutation goes through [`crate::ops`], so a failed call leaves the project unchanged.

use crate::model::project::DEFAULT_NEW_FLOOR_NAME;
use crate::model::{EdgeId, Floor, NodeId, NodeType, Project};
use crate::ops::{self, ApplyError, ApplyResult, FloorOp, MoveDirection, NodePatch, Op};
use crate::query::{find_nearest_node, hit_test, Hit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Node(NodeId),
    Edge(EdgeId),
}

impl From<Hit> for Selection {
    fn from(hit: Hit) -> Self {
        match hit {
            Hit::Node(node_id) => Self::Node(node_id),
            Hit::Edge(edge_id) => Self::Edge(edge_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    project: Project,
    current_floor: usize,
    selection: Option<Selection>,
    most_recent_node_type: NodeType,
}

impl EditorSession {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            current_floor: 0,
            selection: None,
            most_recent_node_type: NodeType::Door,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Direct access for project-level settings. Graph edits should go through the session so
    /// the selection stays valid.
    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    pub fn into_project(self) -> Project {
        self.project
    }

    pub fn current_floor(&self) -> usize {
        self.current_floor.min(self.project.floors().len().saturating_sub(1))
    }

    pub fn floor(&self) -> Option<&Floor> {
        self.project.floor(self.current_floor())
    }

    /// Switches floors and drops the selection.
    pub fn set_current_floor(&mut self, floor: usize) -> Result<(), ApplyError> {
        if self.project.floor(floor).is_none() {
            return Err(ApplyError::FloorNotFound { floor });
        }
        self.current_floor = floor;
        self.selection = None;
        Ok(())
    }

    /// The selection, provided its target still exists on the current floor.
    pub fn selection(&self) -> Option<Selection> {
        let floor = self.floor()?;
        self.selection.filter(|selection| match selection {
            Selection::Node(node_id) => floor.node(*node_id).is_some(),
            Selection::Edge(edge_id) => floor.edge(*edge_id).is_some(),
        })
    }

    pub fn most_recent_node_type(&self) -> NodeType {
        self.most_recent_node_type
    }

    /// Selects the node or edge under `(x, y)`; nodes win over edges. Selecting a node makes its
    /// type the one used for the next placed node.
    pub fn select_at(&mut self, x: f64, y: f64, radius: f64) -> Option<Selection> {
        let floor = self.floor()?;
        let hit = hit_test(floor, x, y, radius);
        let hit_type = match hit {
            Some(Hit::Node(node_id)) => floor.node(node_id).map(|node| node.node_type()),
            _ => None,
        };
        if let Some(node_type) = hit_type {
            self.most_recent_node_type = node_type;
        }
        self.selection = hit.map(Selection::from);
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Places a node of the most recently used type and selects it.
    pub fn add_node_at(&mut self, x: f64, y: f64) -> Result<NodeId, ApplyError> {
        let floor = self.current_floor();
        let node_id = ops::add_node(&mut self.project, floor, x, y, self.most_recent_node_type)?;
        self.selection = Some(Selection::Node(node_id));
        Ok(node_id)
    }

    /// Removes the node nearest to `(x, y)` within `radius`, together with its edges. Returns
    /// `Ok(None)` when nothing is in reach.
    pub fn remove_node_at(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
    ) -> Result<Option<(NodeId, Vec<EdgeId>)>, ApplyError> {
        let floor = self.current_floor();
        let Some(node_id) = self
            .floor()
            .and_then(|target| find_nearest_node(target, x, y, radius))
            .map(|node| node.node_id())
        else {
            return Ok(None);
        };

        let removed_edges = ops::remove_node(&mut self.project, floor, node_id)?;
        self.selection = None;
        Ok(Some((node_id, removed_edges)))
    }

    /// Connects the nodes nearest to the two points. Returns `Ok(None)` when either point has no
    /// node in reach.
    pub fn connect_at(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        radius: f64,
    ) -> Result<Option<EdgeId>, ApplyError> {
        let floor = self.current_floor();
        let Some(target) = self.floor() else {
            return Ok(None);
        };
        let (Some(a), Some(b)) = (
            find_nearest_node(target, from.0, from.1, radius),
            find_nearest_node(target, to.0, to.1, radius),
        ) else {
            return Ok(None);
        };
        let (node_a, node_b) = (a.node_id(), b.node_id());

        let edge_id = ops::add_edge(&mut self.project, floor, node_a, node_b)?;
        self.selection = Some(Selection::Edge(edge_id));
        Ok(Some(edge_id))
    }

    /// Retypes a node on the current floor and remembers the type for the next placed node.
    pub fn set_node_type(&mut self, node_id: NodeId, node_type: NodeType) -> Result<(), ApplyError> {
        let floor = self.current_floor();
        let patch = NodePatch { node_type: Some(node_type), ..NodePatch::default() };
        ops::update_node(&mut self.project, floor, node_id, &patch)?;
        self.most_recent_node_type = node_type;
        Ok(())
    }

    pub fn add_floor(&mut self, name: Option<String>) -> usize {
        let name = name.unwrap_or_else(|| DEFAULT_NEW_FLOOR_NAME.to_owned());
        ops::add_floor(&mut self.project, name)
    }

    /// Moves a floor one step. The current floor keeps pointing at the floor being edited.
    pub fn move_floor(&mut self, floor: usize, direction: MoveDirection) -> Result<usize, ApplyError> {
        let current = self.current_floor();
        let new_index = ops::move_floor(&mut self.project, floor, direction)?;
        if current == floor {
            self.current_floor = new_index;
        } else if current == new_index {
            self.current_floor = floor;
        }
        Ok(new_index)
    }

    /// Deletes a floor. Refuses the last one; the current floor is clamped into range.
    pub fn delete_floor(&mut self, floor: usize) -> Result<Floor, ApplyError> {
        let current = self.current_floor();
        let removed = ops::delete_floor(&mut self.project, floor)?;
        if current == floor {
            self.selection = None;
        }
        if current > floor {
            self.current_floor = current - 1;
        }
        self.current_floor = self.current_floor();
        Ok(removed)
    }

    /// Applies a batch through [`ops::apply_ops`]. The current floor follows floor moves and
    /// deletions in the batch; the selection is dropped when its floor or its target did not
    /// survive.
    pub fn apply(&mut self, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
        let before = self.current_floor();
        let result = ops::apply_ops(&mut self.project, ops)?;
        let (current, survived) = follow_floor_ops(before, ops);
        self.current_floor = current;
        self.current_floor = self.current_floor();
        self.selection = if survived { self.selection() } else { None };
        Ok(result)
    }
}

/// Where the floor at `current` ends up after `ops`, and whether it still exists. Only called
/// for batches that were applied, so every floor op in it was in range.
fn follow_floor_ops(mut current: usize, ops: &[Op]) -> (usize, bool) {
    for op in ops {
        match op {
            Op::Floor(FloorOp::Move { floor, direction }) => {
                let target = match direction {
                    MoveDirection::Up => floor.saturating_sub(1),
                    MoveDirection::Down => floor + 1,
                };
                if current == *floor {
                    current = target;
                } else if current == target {
                    current = *floor;
                }
            }
            Op::Floor(FloorOp::Delete { floor }) => {
                if current == *floor {
                    return (current, false);
                }
                if current > *floor {
                    current -= 1;
                }
            }
            _ => {}
        }
    }
    (current, true)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{EditorSession, Selection};
    use crate::model::fixtures::{named_node, small_building, SmallBuilding};
    use crate::model::NodeType;
    use crate::ops::{ApplyError, EdgeOp, FloorOp, MoveDirection, NodeOp, Op};

    #[fixture]
    fn building() -> (EditorSession, SmallBuilding) {
        let fixture = small_building();
        (EditorSession::new(fixture.project.clone()), fixture)
    }

    #[rstest]
    fn select_prefers_nodes_and_tracks_their_type(building: (EditorSession, SmallBuilding)) {
        let (mut session, fixture) = building;
        assert_eq!(session.most_recent_node_type(), NodeType::Door);

        assert_eq!(session.select_at(29.0, 14.0, 3.0), Some(Selection::Node(fixture.room)));
        assert_eq!(session.most_recent_node_type(), NodeType::Room);

        assert_eq!(session.select_at(20.0, 1.0, 3.0), Some(Selection::Edge(fixture.hall_link)));
        assert_eq!(session.most_recent_node_type(), NodeType::Room);

        assert_eq!(session.select_at(100.0, 100.0, 3.0), None);
        assert_eq!(session.selection(), None);
    }

    #[rstest]
    fn placed_nodes_use_the_most_recent_type(building: (EditorSession, SmallBuilding)) {
        let (mut session, fixture) = building;
        session.set_node_type(fixture.hall_east, NodeType::Hallway).expect("retype");

        let node_id = session.add_node_at(50.0, 0.0).expect("add");

        let floor = session.floor().expect("floor");
        assert_eq!(floor.node(node_id).map(|node| node.node_type()), Some(NodeType::Hallway));
        assert_eq!(session.selection(), Some(Selection::Node(node_id)));
    }

    #[rstest]
    fn remove_node_at_cascades_and_clears_selection(building: (EditorSession, SmallBuilding)) {
        let (mut session, fixture) = building;
        session.select_at(10.0, 0.0, 1.0);

        let removed = session.remove_node_at(10.5, 0.5, 2.0).expect("remove");

        let (node_id, edges) = removed.expect("node in reach");
        assert_eq!(node_id, fixture.hall_west);
        assert_eq!(edges.len(), 2);
        assert_eq!(session.selection(), None);
        assert_eq!(session.floor().map(|floor| floor.edges().len()), Some(2));
        assert_eq!(session.remove_node_at(500.0, 500.0, 2.0), Ok(None));
    }

    #[rstest]
    fn connect_at_binds_the_nearest_nodes(building: (EditorSession, SmallBuilding)) {
        let (mut session, fixture) = building;

        let err = session.connect_at((0.5, 0.0), (30.0, 14.0), 2.0).unwrap_err();
        assert!(matches!(err, ApplyError::Connectivity { floor: 0, .. }));

        let edge_id = session
            .connect_at((10.0, 0.5), (30.5, 15.0), 2.0)
            .expect("connect")
            .expect("both endpoints in reach");
        let edge = session.floor().and_then(|floor| floor.edge(edge_id)).expect("edge");
        assert_eq!((edge.node_a(), edge.node_b()), (fixture.hall_west, fixture.room));
        assert_eq!(session.selection(), Some(Selection::Edge(edge_id)));

        assert_eq!(session.connect_at((10.0, 0.0), (90.0, 90.0), 2.0), Ok(None));
    }

    #[test]
    fn current_floor_follows_moves_and_deletions() {
        let mut session = EditorSession::new(small_building().project);
        let upper = session.add_floor(Some("Upper".to_owned()));
        let roof = session.add_floor(None);
        assert_eq!(session.project().floors()[roof].name(), "New floor");

        session.set_current_floor(upper).expect("floor");
        assert_eq!(session.move_floor(upper, MoveDirection::Up), Ok(0));
        assert_eq!(session.current_floor(), 0);
        assert_eq!(session.move_floor(1, MoveDirection::Up), Ok(0));
        assert_eq!(session.current_floor(), 1);

        session.set_current_floor(2).expect("floor");
        session.delete_floor(2).expect("delete");
        assert_eq!(session.current_floor(), 1);
        session.delete_floor(0).expect("delete");
        assert_eq!(session.current_floor(), 0);
        assert_eq!(session.project().floors()[0].name(), "Upper");

        assert_eq!(session.delete_floor(0).unwrap_err(), ApplyError::LastFloor);
        assert_eq!(session.project().floors().len(), 1);
        assert_eq!(session.set_current_floor(3), Err(ApplyError::FloorNotFound { floor: 3 }));
    }

    #[rstest]
    fn apply_drops_a_selection_that_did_not_survive(building: (EditorSession, SmallBuilding)) {
        let (mut session, fixture) = building;
        session.select_at(30.0, 15.0, 1.0);

        let result = session
            .apply(&[
                Op::Edge(EdgeOp::Remove { floor: 0, edge_id: fixture.room_link }),
                Op::Node(NodeOp::Remove { floor: 0, node_id: fixture.room }),
            ])
            .expect("apply");

        assert_eq!(result.applied, 2);
        assert_eq!(session.selection(), None);
    }

    #[rstest]
    fn apply_drops_the_selection_with_its_floor(building: (EditorSession, SmallBuilding)) {
        let (mut session, fixture) = building;
        let upper = session.add_floor(Some("Upper".to_owned()));
        named_node(session.project_mut(), upper, 10.0, 0.0, NodeType::Stairs, "1");
        assert_eq!(session.select_at(10.0, 0.0, 1.0), Some(Selection::Node(fixture.hall_west)));

        session.apply(&[Op::Floor(FloorOp::Delete { floor: 0 })]).expect("apply");

        assert_eq!(session.current_floor(), 0);
        assert_eq!(session.floor().map(|floor| floor.name()), Some("Upper"));
        assert_eq!(session.selection(), None);
    }

    #[rstest]
    fn apply_keeps_following_a_moved_floor(building: (EditorSession, SmallBuilding)) {
        let (mut session, fixture) = building;
        let upper = session.add_floor(Some("Upper".to_owned()));
        named_node(session.project_mut(), upper, 10.0, 0.0, NodeType::Stairs, "1");
        session.select_at(10.0, 0.0, 1.0);

        session
            .apply(&[
                Op::Floor(FloorOp::Move { floor: 0, direction: MoveDirection::Down }),
                Op::Floor(FloorOp::Add { name: None }),
                Op::Floor(FloorOp::Delete { floor: 0 }),
            ])
            .expect("apply");

        assert_eq!(session.current_floor(), 0);
        assert_eq!(session.floor().map(|floor| floor.name()), Some("Ground"));
        assert_eq!(session.selection(), Some(Selection::Node(fixture.hall_west)));
    }
}
