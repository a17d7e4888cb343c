use timeline_rs::core::{RawGroup, TimelineGroup, link_nested_groups};

#[test]
fn children_append_in_input_order() {
    let mut groups = groups_from(&[(1, None), (2, Some(1)), (3, Some(1))]);
    link_nested_groups(&mut groups);

    let nested: Vec<i64> = groups[0]
        .nested_groups
        .as_ref()
        .expect("parent gains children")
        .to_vec();
    assert_eq!(nested, vec![2, 3]);
    assert_eq!(groups[1].nested_groups, None);
    assert_eq!(groups[2].nested_groups, None);
}

#[test]
fn childless_group_serializes_without_nested_field() {
    let mut groups = groups_from(&[(1, None), (2, Some(1))]);
    link_nested_groups(&mut groups);

    let child = serde_json::to_value(&groups[1]).expect("serialize child");
    assert!(child.get("nestedGroups").is_none());

    let parent = serde_json::to_value(&groups[0]).expect("serialize parent");
    assert_eq!(parent["nestedGroups"], serde_json::json!([2]));
}

#[test]
fn dangling_parent_leaves_group_flat() {
    let mut groups = groups_from(&[(1, None), (2, Some(99))]);
    link_nested_groups(&mut groups);

    assert_eq!(groups[0].nested_groups, None);
    assert_eq!(groups[1].nested_groups, None);
}

#[test]
fn self_reference_leaves_group_flat() {
    let mut groups = groups_from(&[(1, Some(1))]);
    link_nested_groups(&mut groups);

    assert_eq!(groups[0].nested_groups, None);
}

#[test]
fn two_group_cycle_leaves_both_flat() {
    let mut groups = groups_from(&[(1, Some(2)), (2, Some(1))]);
    link_nested_groups(&mut groups);

    assert_eq!(groups[0].nested_groups, None);
    assert_eq!(groups[1].nested_groups, None);
}

#[test]
fn grandchildren_nest_one_level_each() {
    let mut groups = groups_from(&[(1, None), (2, Some(1)), (3, Some(2))]);
    link_nested_groups(&mut groups);

    assert_eq!(groups[0].nested_groups.as_ref().map(|n| n.to_vec()), Some(vec![2]));
    assert_eq!(groups[1].nested_groups.as_ref().map(|n| n.to_vec()), Some(vec![3]));
    assert_eq!(groups[2].nested_groups, None);
}

#[test]
fn children_interleave_across_parents_in_input_order() {
    let mut groups = groups_from(&[(1, None), (2, None), (3, Some(1)), (4, Some(2)), (5, Some(1))]);
    link_nested_groups(&mut groups);

    assert_eq!(groups[0].nested_groups.as_ref().map(|n| n.to_vec()), Some(vec![3, 5]));
    assert_eq!(groups[1].nested_groups.as_ref().map(|n| n.to_vec()), Some(vec![4]));
}

#[test]
fn wire_group_decodes_camel_case() {
    let raw: RawGroup =
        serde_json::from_str(r#"{"id": 2, "content": "Work", "parentGroupId": 1}"#)
            .expect("decode group");
    assert_eq!(raw.parent_group_id, Some(1));

    let group = TimelineGroup::from(raw);
    assert_eq!(group.nested_groups, None);
}

fn groups_from(entries: &[(i64, Option<i64>)]) -> Vec<TimelineGroup> {
    entries
        .iter()
        .map(|&(id, parent_group_id)| {
            TimelineGroup::from(RawGroup {
                id,
                content: format!("group {id}"),
                parent_group_id,
            })
        })
        .collect()
}
