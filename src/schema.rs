use indexmap::{IndexMap, IndexSet};

/// The primitive JSON Schema types an example value can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Null,
    Boolean,
    Integer,
    Number,
    String,
}

impl Primitive {
    /// The value of the `type` keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Boolean => "boolean",
            Primitive::Integer => "integer",
            Primitive::Number => "number",
            Primitive::String => "string",
        }
    }
}

/// A scalar observed in the example data, kept for `enum` schemas.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

/// Whether an object schema admits properties it did not observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionalProperties {
    Allowed,
    Denied,
}

/// An object schema with named properties.
///
/// `required` is always a subset of the keys of `properties`. Both keep the
/// order in which keys were first observed.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    pub properties: IndexMap<String, SchemaNode>,
    pub required: IndexSet<String>,
    pub additional_properties: AdditionalProperties,
}

impl ObjectNode {
    pub fn new(additional_properties: AdditionalProperties) -> Self {
        Self {
            properties: IndexMap::new(),
            required: IndexSet::new(),
            additional_properties,
        }
    }

    /// Adds a property that was present in the example, and so is required.
    pub fn insert_required(&mut self, key: String, schema: SchemaNode) {
        self.required.insert(key.clone());
        self.properties.insert(key, schema);
    }

    fn converge(self, other: ObjectNode) -> ObjectNode {
        let ObjectNode {
            mut properties,
            required,
            additional_properties,
        } = self;

        let required = required
            .into_iter()
            .filter(|k| other.required.contains(k))
            .collect();

        for (k, v) in other.properties {
            match properties.get_mut(&k) {
                Some(prior) => prior.absorb(v),
                None => {
                    properties.insert(k, v);
                }
            }
        }

        let additional_properties = if additional_properties == AdditionalProperties::Allowed
            || other.additional_properties == AdditionalProperties::Allowed
        {
            AdditionalProperties::Allowed
        } else {
            AdditionalProperties::Denied
        };

        ObjectNode {
            properties,
            required,
            additional_properties,
        }
    }
}

/// A node of an inferred schema.
///
/// Each node owns its children outright; no node is shared between two
/// parents.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Accepts anything. Only arises where no example was available, such as
    /// the items of an empty array.
    Any,
    Type(Primitive),
    Enum(Vec<Literal>),
    Object(ObjectNode),
    /// An array; the boxed node describes its items.
    Array(Box<SchemaNode>),
    /// An object whose values all share one schema.
    Map(Box<SchemaNode>),
    /// Two or more distinct shapes, in order of first appearance.
    AnyOf(Vec<SchemaNode>),
}

impl Default for SchemaNode {
    fn default() -> Self {
        SchemaNode::Any
    }
}

impl SchemaNode {
    /// The `type` keyword this node carries, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            SchemaNode::Any | SchemaNode::Enum(_) | SchemaNode::AnyOf(_) => None,
            SchemaNode::Type(primitive) => Some(primitive.as_str()),
            SchemaNode::Object(_) | SchemaNode::Map(_) => Some("object"),
            SchemaNode::Array(_) => Some("array"),
        }
    }

    /// Folds another fragment into this one, producing a schema that accepts
    /// everything either of them accepts.
    ///
    /// Objects merge into a single object: the union of their properties, the
    /// intersection of their required keys. Arrays, maps, and enums likewise
    /// merge with their own kind. Everything else that differs becomes an
    /// `AnyOf`, in the order the shapes were first seen.
    pub fn converge(self, other: SchemaNode) -> SchemaNode {
        match (self, other) {
            (SchemaNode::Any, other) => other,
            (this, SchemaNode::Any) => this,

            (SchemaNode::AnyOf(mut members), other) => {
                for node in other.into_members() {
                    insert_member(&mut members, node);
                }

                SchemaNode::AnyOf(members)
            }
            (this, SchemaNode::AnyOf(others)) => {
                let mut members = vec![this];
                for node in others {
                    insert_member(&mut members, node);
                }

                SchemaNode::AnyOf(members)
            }

            (SchemaNode::Object(a), SchemaNode::Object(b)) => SchemaNode::Object(a.converge(b)),
            (SchemaNode::Array(a), SchemaNode::Array(b)) => {
                SchemaNode::Array(Box::new(a.converge(*b)))
            }
            (SchemaNode::Map(a), SchemaNode::Map(b)) => SchemaNode::Map(Box::new(a.converge(*b))),
            (SchemaNode::Enum(mut values), SchemaNode::Enum(others)) => {
                for v in others {
                    if !values.contains(&v) {
                        values.push(v);
                    }
                }

                SchemaNode::Enum(values)
            }

            (this, other) => {
                if this == other {
                    this
                } else {
                    SchemaNode::AnyOf(vec![this, other])
                }
            }
        }
    }

    fn absorb(&mut self, other: SchemaNode) {
        let this = std::mem::take(self);
        *self = this.converge(other);
    }

    fn into_members(self) -> Vec<SchemaNode> {
        match self {
            SchemaNode::AnyOf(members) => members,
            node => vec![node],
        }
    }

    fn same_kind(&self, other: &SchemaNode) -> bool {
        match (self, other) {
            (SchemaNode::Object(_), SchemaNode::Object(_))
            | (SchemaNode::Array(_), SchemaNode::Array(_))
            | (SchemaNode::Map(_), SchemaNode::Map(_))
            | (SchemaNode::Enum(_), SchemaNode::Enum(_)) => true,
            (a, b) => a == b,
        }
    }
}

fn insert_member(members: &mut Vec<SchemaNode>, node: SchemaNode) {
    if let SchemaNode::Any = node {
        return;
    }

    match members.iter_mut().find(|m| m.same_kind(&node)) {
        Some(member) => member.absorb(node),
        None => members.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(keys: &[(&str, SchemaNode)]) -> SchemaNode {
        let mut node = ObjectNode::new(AdditionalProperties::Allowed);
        for (k, v) in keys {
            node.insert_required(k.to_string(), v.clone());
        }

        SchemaNode::Object(node)
    }

    #[test]
    fn converge_identical() {
        let int = SchemaNode::Type(Primitive::Integer);
        assert_eq!(int, int.clone().converge(int.clone()));
        assert_eq!(int, SchemaNode::Any.converge(int.clone()));
        assert_eq!(int, int.clone().converge(SchemaNode::Any));
    }

    #[test]
    fn converge_distinct() {
        let int = SchemaNode::Type(Primitive::Integer);
        let string = SchemaNode::Type(Primitive::String);
        let null = SchemaNode::Type(Primitive::Null);

        let union = int.clone().converge(string.clone());
        assert_eq!(SchemaNode::AnyOf(vec![int.clone(), string.clone()]), union);

        // Repeats are not added twice; new shapes go on the end.
        let union = union.converge(int.clone()).converge(null.clone());
        assert_eq!(SchemaNode::AnyOf(vec![int, string, null]), union);
    }

    #[test]
    fn converge_objects() {
        let a = object(&[
            ("a", SchemaNode::Type(Primitive::Integer)),
            ("b", SchemaNode::Type(Primitive::Integer)),
        ]);
        let b = object(&[
            ("c", SchemaNode::Type(Primitive::String)),
            ("a", SchemaNode::Type(Primitive::String)),
        ]);

        match a.converge(b) {
            SchemaNode::Object(node) => {
                let keys: Vec<_> = node.properties.keys().map(String::as_str).collect();
                assert_eq!(vec!["a", "b", "c"], keys);

                let required: Vec<_> = node.required.iter().map(String::as_str).collect();
                assert_eq!(vec!["a"], required);

                assert_eq!(
                    SchemaNode::AnyOf(vec![
                        SchemaNode::Type(Primitive::Integer),
                        SchemaNode::Type(Primitive::String),
                    ]),
                    node.properties["a"]
                );
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn converge_objects_inside_union() {
        let int = SchemaNode::Type(Primitive::Integer);
        let union = int
            .clone()
            .converge(object(&[("a", int.clone())]))
            .converge(object(&[("b", int.clone())]));

        match union {
            SchemaNode::AnyOf(members) => {
                assert_eq!(2, members.len());
                assert_eq!(int, members[0]);
                match &members[1] {
                    SchemaNode::Object(node) => {
                        assert_eq!(2, node.properties.len());
                        assert!(node.required.is_empty());
                    }
                    other => panic!("expected object, got {:?}", other),
                }
            }
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn converge_arrays_and_enums() {
        let empty = SchemaNode::Array(Box::new(SchemaNode::Any));
        let ints = SchemaNode::Array(Box::new(SchemaNode::Type(Primitive::Integer)));
        assert_eq!(ints, empty.converge(ints.clone()));

        let a = SchemaNode::Enum(vec![Literal::String("x".into())]);
        let b = SchemaNode::Enum(vec![Literal::String("y".into()), Literal::String("x".into())]);
        assert_eq!(
            SchemaNode::Enum(vec![Literal::String("x".into()), Literal::String("y".into())]),
            a.converge(b)
        );
    }

    #[test]
    fn required_is_subset_of_properties() {
        let merged = object(&[("a", SchemaNode::Type(Primitive::Null))])
            .converge(object(&[("b", SchemaNode::Type(Primitive::Null))]))
            .converge(object(&[
                ("a", SchemaNode::Type(Primitive::Null)),
                ("b", SchemaNode::Type(Primitive::Null)),
            ]));

        match merged {
            SchemaNode::Object(node) => {
                assert!(node.required.iter().all(|k| node.properties.contains_key(k)));
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn type_names() {
        assert_eq!(None, SchemaNode::Any.type_name());
        assert_eq!(Some("integer"), SchemaNode::Type(Primitive::Integer).type_name());
        assert_eq!(Some("object"), object(&[]).type_name());
        assert_eq!(Some("object"), SchemaNode::Map(Box::new(SchemaNode::Any)).type_name());
        assert_eq!(Some("array"), SchemaNode::Array(Box::new(SchemaNode::Any)).type_name());
    }
}
