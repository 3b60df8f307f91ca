use storylist_core::{seed_records, Record, RecordId};
use uuid::Uuid;

#[test]
fn seed_catalog_matches_fixed_fields() {
    let records = seed_records();
    assert_eq!(records.len(), 2);

    let react = &records[0];
    assert_eq!(react.id, RecordId::Seed(0));
    assert_eq!(react.title, "React");
    assert_eq!(react.url.as_deref(), Some("https://reactjs.org/"));
    assert_eq!(react.author.as_deref(), Some("Jordan Walke"));
    assert_eq!(react.num_comments, Some(3));
    assert_eq!(react.points, Some(4));
    assert!(!react.is_complete);

    let redux = &records[1];
    assert_eq!(redux.id, RecordId::Seed(1));
    assert_eq!(redux.title, "Redux");
    assert_eq!(redux.url.as_deref(), Some("https://redux.js.org/"));
    assert_eq!(redux.author.as_deref(), Some("Dan Abramov, Andrew Clark"));
    assert_eq!(redux.num_comments, Some(2));
    assert_eq!(redux.points, Some(5));
    assert!(redux.is_complete);
}

#[test]
fn seed_record_serializes_with_catalog_field_names() {
    let json = serde_json::to_value(&seed_records()[1]).unwrap();

    assert_eq!(json["objectID"], 1);
    assert_eq!(json["title"], "Redux");
    assert_eq!(json["author"], "Dan Abramov, Andrew Clark");
    assert_eq!(json["num_comments"], 2);
    assert_eq!(json["points"], 5);
    assert_eq!(json["isComplete"], true);

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, seed_records()[1]);
}

#[test]
fn added_record_omits_descriptive_fields_on_the_wire() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = Record::with_id(RecordId::Generated(id), "Vue");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["objectID"], id.to_string());
    assert_eq!(json["isComplete"], false);
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("url"));
    assert!(!object.contains_key("author"));
    assert!(!object.contains_key("num_comments"));
    assert!(!object.contains_key("points"));
}

#[test]
fn missing_completion_flag_defaults_to_false() {
    let value = serde_json::json!({
        "objectID": "11111111-2222-4333-8444-555555555555",
        "title": "Svelte"
    });

    let record: Record = serde_json::from_value(value).unwrap();
    assert!(!record.is_complete);
    assert!(matches!(record.id, RecordId::Generated(_)));
}
