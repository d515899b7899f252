use crate::video::ensure_description;
use serde_json::Value;
use tracing::{trace, warn};

const SUBJECTS: &str = "subjects";
const UNITS: &str = "units";
const VIDEOS: &str = "videos";

/// Walks `subjects -> units -> videos` and gives every video a `description`.
///
/// Missing containers count as empty. A container that is present but is not
/// an array, or an entry that is not an object, is skipped with a warning.
/// Returns the number of fields inserted.
pub fn add_missing_descriptions(document: &mut Value) -> usize {
    let mut count = 0;

    for subject in children_mut(document, SUBJECTS) {
        for unit in children_mut(subject, UNITS) {
            for video in children_mut(unit, VIDEOS) {
                match video {
                    Value::Object(fields) => {
                        if ensure_description(fields) {
                            count += 1;
                        }
                    }
                    other => warn!(kind = kind(other), "video is not an object, skipping"),
                }
            }
        }
    }

    trace!(count, "descriptions added");
    count
}

fn children_mut<'a>(node: &'a mut Value, key: &str) -> &'a mut [Value] {
    match node {
        Value::Object(fields) => match fields.get_mut(key) {
            Some(Value::Array(entries)) => entries.as_mut_slice(),
            Some(other) => {
                warn!(key, kind = kind(other), "expected an array, skipping");
                &mut []
            }
            None => &mut [],
        },
        other => {
            warn!(key, kind = kind(other), "expected an object, skipping");
            &mut []
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn adds_description_only_where_missing() {
        let mut document = json!({
            "subjects": [{ "units": [{ "videos": [
                { "title": "A" },
                { "title": "B", "description": "exists" }
            ]}]}]
        });

        assert_eq!(add_missing_descriptions(&mut document), 1);
        assert_eq!(
            document,
            json!({
                "subjects": [{ "units": [{ "videos": [
                    { "title": "A", "description": "" },
                    { "title": "B", "description": "exists" }
                ]}]}]
            })
        );
    }

    #[test]
    fn counts_across_subjects_and_units() {
        let mut document = json!({
            "title": "数学と英語",
            "subjects": [
                { "name": "数学", "units": [
                    { "videos": [{ "id": 1 }, { "id": 2 }] },
                    { "videos": [{ "id": 3, "description": "" }] }
                ]},
                { "name": "英語", "units": [
                    { "videos": [{ "id": 4 }] }
                ]}
            ]
        });

        assert_eq!(add_missing_descriptions(&mut document), 3);
        assert_eq!(document["title"], json!("数学と英語"));
        assert_eq!(document["subjects"][1]["name"], json!("英語"));
        assert_eq!(
            document["subjects"][0]["units"][0]["videos"][1],
            json!({ "id": 2, "description": "" })
        );
    }

    #[test]
    fn second_pass_inserts_nothing() {
        let mut document = json!({
            "subjects": [{ "units": [{ "videos": [{ "title": "A" }, { "title": "B" }] }] }]
        });

        assert_eq!(add_missing_descriptions(&mut document), 2);
        let first = document.clone();
        assert_eq!(add_missing_descriptions(&mut document), 0);
        assert_eq!(document, first);
    }

    #[test]
    fn missing_containers_are_empty() {
        let mut document = json!({
            "subjects": [
                { "name": "no units" },
                { "units": [{ "name": "no videos" }, { "videos": [] }] }
            ]
        });
        let before = document.clone();

        assert_eq!(add_missing_descriptions(&mut document), 0);
        assert_eq!(document, before);

        let mut empty = json!({ "subjects": [] });
        assert_eq!(add_missing_descriptions(&mut empty), 0);
        assert_eq!(empty, json!({ "subjects": [] }));

        let mut bare = json!({ "version": 2 });
        assert_eq!(add_missing_descriptions(&mut bare), 0);
    }

    #[test]
    fn malformed_branches_are_skipped() {
        let mut document = json!({
            "subjects": [
                "not a subject",
                { "units": { "videos": [{ "title": "hidden" }] } },
                { "units": [
                    { "videos": "none yet" },
                    { "videos": [42, null, { "title": "C" }] }
                ]}
            ]
        });

        assert_eq!(add_missing_descriptions(&mut document), 1);
        assert_eq!(document["subjects"][0], json!("not a subject"));
        assert_eq!(
            document["subjects"][1],
            json!({ "units": { "videos": [{ "title": "hidden" }] } })
        );
        assert_eq!(
            document["subjects"][2]["units"][1]["videos"],
            json!([42, null, { "title": "C", "description": "" }])
        );
    }

    #[test]
    fn non_object_root_is_skipped() {
        let mut document = json!([{ "subjects": [] }]);

        assert_eq!(add_missing_descriptions(&mut document), 0);
        assert_eq!(document, json!([{ "subjects": [] }]));
    }
}
