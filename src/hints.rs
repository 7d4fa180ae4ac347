use crate::schema::AdditionalProperties;
use crate::Error;

/// Hints for [`Inferrer`][`crate::Inferrer`].
///
/// By default, [`Inferrer`][`crate::Inferrer`] describes every scalar by its
/// type and every object by its properties. Hints tell it to use other forms
/// at particular locations in the input:
///
/// * `enums` points at scalars that should be described by the set of values
///   seen there (an `enum` schema) rather than by their type.
/// * `values` points at objects that are really maps from arbitrary keys to
///   values of one shape (an `additionalProperties` schema).
///
/// See [`HintSet`] for how the locations are written.
///
/// `additional_properties` decides whether inferred object schemas admit
/// properties that were not in the example.
///
/// ```
/// use serde_json::json;
/// use json_schema_infer::{AdditionalProperties, HintSet, Hints, Inferrer};
///
/// let status = vec!["orders".to_string(), "-".to_string(), "status".to_string()];
/// let counts = vec!["counts".to_string()];
/// let inferrer = Inferrer::new(Hints::new(
///     AdditionalProperties::Denied,
///     HintSet::new(vec![&status]),
///     HintSet::new(vec![&counts]),
/// ));
///
/// let schema = inferrer.infer(json!({
///     "orders": [{ "status": "open" }, { "status": "closed" }],
///     "counts": { "open": 1, "closed": 4 },
/// }));
///
/// assert_eq!(
///     json!({
///         "type": "object",
///         "properties": {
///             "orders": {
///                 "type": "array",
///                 "items": {
///                     "type": "object",
///                     "properties": {
///                         "status": { "enum": ["open", "closed"] },
///                     },
///                     "required": ["status"],
///                     "additionalProperties": false,
///                 },
///             },
///             "counts": {
///                 "type": "object",
///                 "additionalProperties": { "type": "integer" },
///             },
///         },
///         "required": ["orders", "counts"],
///         "additionalProperties": false,
///     }),
///     json_schema_infer::serialize::to_value(&schema).unwrap(),
/// );
/// ```
#[derive(Debug)]
pub struct Hints<'a> {
    additional_properties: AdditionalProperties,
    enums: HintSet<'a>,
    values: HintSet<'a>,
}

impl<'a> Hints<'a> {
    /// Constructs a new set of [`Hints`].
    pub fn new(
        additional_properties: AdditionalProperties,
        enums: HintSet<'a>,
        values: HintSet<'a>,
    ) -> Self {
        Hints {
            additional_properties,
            enums,
            values,
        }
    }

    pub(crate) fn additional_properties(&self) -> AdditionalProperties {
        self.additional_properties
    }

    pub(crate) fn sub_hints(&self, key: &str) -> Self {
        Self::new(
            self.additional_properties,
            self.enums.sub_hints(key),
            self.values.sub_hints(key),
        )
    }

    pub(crate) fn is_enum_active(&self) -> bool {
        self.enums.is_active()
    }

    pub(crate) fn is_values_active(&self) -> bool {
        self.values.is_active()
    }
}

impl Default for Hints<'_> {
    fn default() -> Self {
        Hints::new(
            AdditionalProperties::Allowed,
            HintSet::new(vec![]),
            HintSet::new(vec![]),
        )
    }
}

const WILDCARD: &str = "-";

/// The locations in an example document that one kind of hint applies to.
///
/// Each location is a path of property names and array indices, as produced
/// by [`parse_json_pointer`]. While the inferrer descends into the document it
/// narrows the set to the paths still matching; once a path is used up, the
/// hint applies to the value at hand.
///
/// ```
/// use json_schema_infer::{parse_json_pointer, HintSet};
///
/// let status = parse_json_pointer("/orders/-/status").unwrap();
/// let counts = parse_json_pointer("/counts").unwrap();
/// HintSet::new(vec![&status, &counts]);
/// ```
///
/// A `-` segment stands for any property name or array index, so the first
/// path above reaches the `status` of every element of `orders`.
#[derive(Debug)]
pub struct HintSet<'a> {
    paths: Vec<&'a [String]>,
}

impl<'a> HintSet<'a> {
    /// Constructs a new [`HintSet`] from a list of paths.
    pub fn new(paths: Vec<&'a [String]>) -> Self {
        HintSet { paths }
    }

    /// The paths that continue below the child named `key`.
    pub(crate) fn sub_hints(&self, key: &str) -> Self {
        Self::new(
            self.paths
                .iter()
                .filter(|path| match path.first() {
                    Some(segment) => segment == WILDCARD || segment == key,
                    None => false,
                })
                .map(|path| &path[1..])
                .collect(),
        )
    }

    /// Whether some path ends at the current value.
    pub(crate) fn is_active(&self) -> bool {
        self.paths.iter().any(|path| path.is_empty())
    }
}

/// Splits a JSON Pointer (RFC 6901) into its reference tokens.
///
/// The empty pointer refers to the whole document and yields no tokens. Any
/// other pointer must start with `/`.
///
/// ```
/// use json_schema_infer::parse_json_pointer;
///
/// assert_eq!(vec!["a/b", "~c"], parse_json_pointer("/a~1b/~0c").unwrap());
/// assert!(parse_json_pointer("").unwrap().is_empty());
/// assert!(parse_json_pointer("counts").is_err());
/// ```
pub fn parse_json_pointer(s: &str) -> Result<Vec<String>, Error> {
    if s.is_empty() {
        return Ok(vec![]);
    }

    if !s.starts_with('/') {
        return Err(Error::Configuration(format!(
            "invalid JSON Pointer {:?}: must be empty or start with '/'",
            s
        )));
    }

    Ok(s.split('/')
        .skip(1)
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect())
}
