use timeline_rs::TimelineError;
use timeline_rs::api::TimelinePayload;

#[test]
fn decodes_camel_case_payload() {
    let payload = TimelinePayload::from_json_str(FIXTURE).expect("decode payload");

    assert_eq!(payload.timeline.title, "My Story");
    assert_eq!(payload.timeline.sub_title, "so far");
    assert_eq!(payload.event_list.len(), 2);
    assert_eq!(payload.event_group_list.len(), 2);

    let second = &payload.event_list[1];
    assert!(second.current);
    assert_eq!(second.item_type.as_deref(), Some("range"));
    assert_eq!(payload.event_group_list[1].parent_group_id, Some(1));
}

#[test]
fn missing_event_list_is_malformed() {
    let result = TimelinePayload::from_json_str(r#"{"timeline": {"title": "t"}}"#);
    assert!(matches!(result, Err(TimelineError::MalformedPayload(_))));
}

#[test]
fn garbage_body_is_malformed() {
    let result = TimelinePayload::from_json_str("<html>502 Bad Gateway</html>");
    assert!(matches!(result, Err(TimelineError::MalformedPayload(_))));
}

#[test]
fn unknown_fields_are_tolerated() {
    let body = r#"{
        "timeline": {"title": "t", "subTitle": "s", "ownerId": 7},
        "eventList": [],
        "eventGroupList": [],
        "serverVersion": "2.3"
    }"#;

    let payload = TimelinePayload::from_json_str(body).expect("decode payload");
    assert!(payload.event_list.is_empty());
}

#[test]
fn pretty_json_round_trips() {
    let payload = TimelinePayload::from_json_str(FIXTURE).expect("decode payload");
    let body = payload.to_json_pretty().expect("serialize payload");
    let reparsed = TimelinePayload::from_json_str(&body).expect("reparse payload");
    assert_eq!(payload, reparsed);
}

const FIXTURE: &str = r#"{
    "timeline": {"title": "My Story", "subTitle": "so far"},
    "eventList": [
        {"id": 1, "start": "2020-01-01", "content": "Moved"},
        {"id": 2, "start": "2021-06-01", "current": true, "type": "range", "group": 1}
    ],
    "eventGroupList": [
        {"id": 1, "content": "Life"},
        {"id": 2, "content": "Work", "parentGroupId": 1}
    ]
}"#;
