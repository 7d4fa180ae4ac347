use crate::hints::Hints;
use crate::inferred_number::InferredNumber;
use crate::schema::{Literal, ObjectNode, Primitive, SchemaNode};
use serde_json::Value;

/// Classifies an example value, recursing into arrays and objects.
///
/// This never fails: every JSON value has a schema that describes it.
pub fn classify(value: Value, hints: &Hints) -> SchemaNode {
    match value {
        Value::Null => {
            if hints.is_enum_active() {
                SchemaNode::Enum(vec![Literal::Null])
            } else {
                SchemaNode::Type(Primitive::Null)
            }
        }
        Value::Bool(b) => {
            if hints.is_enum_active() {
                SchemaNode::Enum(vec![Literal::Boolean(b)])
            } else {
                SchemaNode::Type(Primitive::Boolean)
            }
        }
        Value::Number(n) => {
            let number = InferredNumber::new(&n);
            if hints.is_enum_active() {
                SchemaNode::Enum(vec![number.into_literal()])
            } else {
                SchemaNode::Type(number.primitive())
            }
        }
        Value::String(s) => {
            if hints.is_enum_active() {
                SchemaNode::Enum(vec![Literal::String(s)])
            } else {
                SchemaNode::Type(Primitive::String)
            }
        }
        Value::Array(vals) => {
            let mut items = SchemaNode::Any;
            for (i, v) in vals.into_iter().enumerate() {
                items = items.converge(classify(v, &hints.sub_hints(&i.to_string())));
            }

            SchemaNode::Array(Box::new(items))
        }
        Value::Object(obj) => {
            if hints.is_values_active() {
                let mut values = SchemaNode::Any;
                for (k, v) in obj {
                    values = values.converge(classify(v, &hints.sub_hints(&k)));
                }

                return SchemaNode::Map(Box::new(values));
            }

            let mut node = ObjectNode::new(hints.additional_properties());
            for (k, v) in obj {
                let sub_schema = classify(v, &hints.sub_hints(&k));
                node.insert_required(k, sub_schema);
            }

            SchemaNode::Object(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::HintSet;
    use crate::schema::AdditionalProperties;
    use serde_json::json;

    fn plain(value: Value) -> SchemaNode {
        classify(value, &Hints::default())
    }

    #[test]
    fn primitives() {
        assert_eq!(SchemaNode::Type(Primitive::Null), plain(json!(null)));
        assert_eq!(SchemaNode::Type(Primitive::Boolean), plain(json!(true)));
        assert_eq!(SchemaNode::Type(Primitive::Boolean), plain(json!(false)));
        assert_eq!(SchemaNode::Type(Primitive::String), plain(json!("s")));
        assert_eq!(SchemaNode::Type(Primitive::Integer), plain(json!(1)));
        assert_eq!(SchemaNode::Type(Primitive::Number), plain(json!(1.5)));
    }

    #[test]
    fn strings_have_no_format() {
        assert_eq!(
            SchemaNode::Type(Primitive::String),
            plain(json!("2020-01-01T00:00:00Z"))
        );
    }

    #[test]
    fn arrays() {
        assert_eq!(SchemaNode::Array(Box::new(SchemaNode::Any)), plain(json!([])));
        assert_eq!(
            SchemaNode::Array(Box::new(SchemaNode::Type(Primitive::Integer))),
            plain(json!([1, 2, 3]))
        );
        assert_eq!(
            SchemaNode::Array(Box::new(SchemaNode::AnyOf(vec![
                SchemaNode::Type(Primitive::Integer),
                SchemaNode::Type(Primitive::String),
            ]))),
            plain(json!([1, "x", 2]))
        );
    }

    #[test]
    fn objects() {
        match plain(json!({ "b": 1, "a": { "c": null } })) {
            SchemaNode::Object(node) => {
                let keys: Vec<_> = node.properties.keys().map(String::as_str).collect();
                assert_eq!(vec!["b", "a"], keys);
                let required: Vec<_> = node.required.iter().map(String::as_str).collect();
                assert_eq!(vec!["b", "a"], required);
                assert_eq!(AdditionalProperties::Allowed, node.additional_properties);

                match &node.properties["a"] {
                    SchemaNode::Object(inner) => {
                        assert_eq!(SchemaNode::Type(Primitive::Null), inner.properties["c"]);
                    }
                    other => panic!("expected object, got {:?}", other),
                }
            }
            other => panic!("expected object, got {:?}", other),
        }

        assert_eq!(
            SchemaNode::Object(ObjectNode::new(AdditionalProperties::Allowed)),
            plain(json!({}))
        );
    }

    #[test]
    fn array_of_objects() {
        let schema = plain(json!([
            { "a": 1, "b": 2 },
            { "a": 3, "c": "x" },
        ]));

        match schema {
            SchemaNode::Array(items) => match *items {
                SchemaNode::Object(node) => {
                    let keys: Vec<_> = node.properties.keys().map(String::as_str).collect();
                    assert_eq!(vec!["a", "b", "c"], keys);
                    let required: Vec<_> = node.required.iter().map(String::as_str).collect();
                    assert_eq!(vec!["a"], required);
                }
                other => panic!("expected object, got {:?}", other),
            },
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn enum_hints() {
        let path = vec!["-".to_string()];
        let hints = Hints::new(
            AdditionalProperties::Allowed,
            HintSet::new(vec![&path]),
            HintSet::new(vec![]),
        );

        assert_eq!(
            SchemaNode::Array(Box::new(SchemaNode::Enum(vec![
                Literal::String("a".to_string()),
                Literal::Integer(1),
                Literal::Null,
                Literal::Boolean(true),
                Literal::Number(0.5),
            ]))),
            classify(json!(["a", 1, "a", null, true, 0.5]), &hints)
        );
    }

    #[test]
    fn values_hints() {
        let path: Vec<String> = vec![];
        let hints = Hints::new(
            AdditionalProperties::Allowed,
            HintSet::new(vec![]),
            HintSet::new(vec![&path]),
        );

        assert_eq!(
            SchemaNode::Map(Box::new(SchemaNode::Type(Primitive::String))),
            classify(json!({ "x": "1", "y": "2" }), &hints)
        );
        assert_eq!(
            SchemaNode::Map(Box::new(SchemaNode::Any)),
            classify(json!({}), &hints)
        );

        // A values hint on a non-object changes nothing.
        assert_eq!(
            SchemaNode::Type(Primitive::String),
            classify(json!("x"), &hints)
        );
    }

    #[test]
    fn denied_additional_properties() {
        let hints = Hints::new(
            AdditionalProperties::Denied,
            HintSet::new(vec![]),
            HintSet::new(vec![]),
        );

        match classify(json!({ "a": { "b": 1 } }), &hints) {
            SchemaNode::Object(node) => {
                assert_eq!(AdditionalProperties::Denied, node.additional_properties);
                match &node.properties["a"] {
                    SchemaNode::Object(inner) => {
                        assert_eq!(AdditionalProperties::Denied, inner.additional_properties)
                    }
                    other => panic!("expected object, got {:?}", other),
                }
            }
            other => panic!("expected object, got {:?}", other),
        }
    }
}
