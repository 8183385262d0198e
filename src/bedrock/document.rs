//! Conversion from `serde_json::Value` into the smithy `Document` type the
//! async-invoke API takes as its model input.

use aws_smithy_types::{Document, Number};
use serde_json::Value;

pub fn json_to_document(value: Value) -> Document {
    match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Bool(b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Document::Number(Number::PosInt(u))
            } else if let Some(i) = n.as_i64() {
                Document::Number(Number::NegInt(i))
            } else {
                Document::Number(Number::Float(n.as_f64().unwrap_or(0.0)))
            }
        }
        Value::String(s) => Document::String(s),
        Value::Array(items) => {
            Document::Array(items.into_iter().map(json_to_document).collect())
        }
        Value::Object(map) => Document::Object(
            map.into_iter()
                .map(|(key, value)| (key, json_to_document(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_nested_structures() {
        let document = json_to_document(json!({
            "taskType": "TEXT_VIDEO",
            "videoGenerationConfig": {
                "durationSeconds": 6,
                "fps": 24
            },
            "images": [{"format": "jpeg"}],
            "flag": true,
            "nothing": null
        }));

        let object = match document {
            Document::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        };

        assert_eq!(
            object.get("taskType"),
            Some(&Document::String("TEXT_VIDEO".to_string()))
        );
        assert_eq!(object.get("flag"), Some(&Document::Bool(true)));
        assert_eq!(object.get("nothing"), Some(&Document::Null));

        match object.get("videoGenerationConfig") {
            Some(Document::Object(config)) => {
                assert_eq!(
                    config.get("durationSeconds"),
                    Some(&Document::Number(Number::PosInt(6)))
                );
            }
            other => panic!("expected nested object, got {:?}", other),
        }

        match object.get("images") {
            Some(Document::Array(images)) => assert_eq!(images.len(), 1),
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn converts_negative_and_float_numbers() {
        assert_eq!(
            json_to_document(json!(-3)),
            Document::Number(Number::NegInt(-3))
        );
        assert_eq!(
            json_to_document(json!(1.5)),
            Document::Number(Number::Float(1.5))
        );
    }
}
