use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::types::GroupId;

/// Wire-format group record as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGroup {
    pub id: GroupId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_group_id: Option<GroupId>,
}

/// Group record in the shape the widget consumes at construction time.
///
/// `nested_groups` is computed by [`link_nested_groups`], never supplied by
/// the backend. A group with no children keeps the field absent (`None`,
/// skipped on serialization) rather than empty, to match widget expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGroup {
    pub id: GroupId,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_group_id: Option<GroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_groups: Option<SmallVec<[GroupId; 4]>>,
}

impl From<RawGroup> for TimelineGroup {
    fn from(raw: RawGroup) -> Self {
        Self {
            id: raw.id,
            content: raw.content,
            parent_group_id: raw.parent_group_id,
            nested_groups: None,
        }
    }
}

/// Resolves parent/child references into the nested-group shape.
///
/// For every group with a `parent_group_id`, the child's id is appended to
/// the parent's `nested_groups`, creating the collection on first use.
/// Child order follows the input collection's order. Dangling parent
/// references and parent chains that would close a cycle leave the child
/// unparented. Must run once, before the collection is handed to the widget.
pub fn link_nested_groups(groups: &mut [TimelineGroup]) {
    let index_by_id: HashMap<GroupId, usize> = groups
        .iter()
        .enumerate()
        .map(|(index, group)| (group.id, index))
        .collect();

    for child_index in 0..groups.len() {
        let child_id = groups[child_index].id;
        let Some(parent_id) = groups[child_index].parent_group_id else {
            continue;
        };

        let Some(&parent_index) = index_by_id.get(&parent_id) else {
            debug!(child_id, parent_id, "dangling parent group reference, leaving group flat");
            continue;
        };

        if closes_parent_cycle(groups, &index_by_id, child_id, parent_id) {
            warn!(child_id, parent_id, "cyclic parent chain, leaving group flat");
            continue;
        }

        groups[parent_index]
            .nested_groups
            .get_or_insert_with(SmallVec::new)
            .push(child_id);
    }
}

/// Walks the parent chain upward from `parent_id` and reports whether it
/// reaches back to `child_id`. Bounded by the collection length so a cycle
/// already present among ancestors cannot spin forever.
fn closes_parent_cycle(
    groups: &[TimelineGroup],
    index_by_id: &HashMap<GroupId, usize>,
    child_id: GroupId,
    parent_id: GroupId,
) -> bool {
    let mut cursor = Some(parent_id);
    for _ in 0..=groups.len() {
        let Some(current) = cursor else {
            return false;
        };
        if current == child_id {
            return true;
        }
        cursor = index_by_id
            .get(&current)
            .and_then(|&index| groups[index].parent_group_id);
    }
    true
}
