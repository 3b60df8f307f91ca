//! Fixed seed catalog loaded at session start.

use crate::model::record::{Record, RecordId};

/// Returns the two-record catalog every session starts from.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record {
            id: RecordId::Seed(0),
            title: "React".to_string(),
            url: Some("https://reactjs.org/".to_string()),
            author: Some("Jordan Walke".to_string()),
            num_comments: Some(3),
            points: Some(4),
            is_complete: false,
        },
        Record {
            id: RecordId::Seed(1),
            title: "Redux".to_string(),
            url: Some("https://redux.js.org/".to_string()),
            author: Some("Dan Abramov, Andrew Clark".to_string()),
            num_comments: Some(2),
            points: Some(5),
            is_complete: true,
        },
    ]
}
