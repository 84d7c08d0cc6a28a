use serde_json::Value;

/// Dotted path into a stored document, e.g. `features.brand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.0.split('.')
    }
}

pub const COLLECTION_TYPE: FieldPath = FieldPath::new("collectionType");
pub const SUB_COLLECTION_TYPE: FieldPath = FieldPath::new("subCollectionType");
pub const MODEL_NAME: FieldPath = FieldPath::new("modelName");
pub const HIGHLIGHTS: FieldPath = FieldPath::new("highlights");
pub const MRP: FieldPath = FieldPath::new("mrp");
pub const DISCOUNT: FieldPath = FieldPath::new("discount");

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Equal to the value; on array fields, any element equal.
    Eq(Value),
    /// Equal to any of the values.
    In(Vec<Value>),
    /// String field containing the text, ignoring case.
    Contains(String),
    /// Array field with at least one string element containing the text, ignoring case.
    AnyElementContains(String),
    Gte(f64),
    Lte(f64),
}

/// Predicate tree evaluated by a [`DocumentStore`](super::DocumentStore).
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Field { path: FieldPath, predicate: Predicate },
}

impl Filter {
    pub fn field(path: FieldPath, predicate: Predicate) -> Self {
        Filter::Field { path, predicate }
    }

    pub fn eq(path: FieldPath, value: impl Into<Value>) -> Self {
        Self::field(path, Predicate::Eq(value.into()))
    }

    pub fn is_in(path: FieldPath, values: Vec<Value>) -> Self {
        Self::field(path, Predicate::In(values))
    }

    pub fn contains(path: FieldPath, text: impl Into<String>) -> Self {
        Self::field(path, Predicate::Contains(text.into()))
    }

    pub fn any_element_contains(path: FieldPath, text: impl Into<String>) -> Self {
        Self::field(path, Predicate::AnyElementContains(text.into()))
    }

    pub fn gte(path: FieldPath, bound: f64) -> Self {
        Self::field(path, Predicate::Gte(bound))
    }

    pub fn lte(path: FieldPath, bound: f64) -> Self {
        Self::field(path, Predicate::Lte(bound))
    }

    /// Flattens the `Or` / `And` variants into their children for inspection.
    pub fn clauses(&self) -> &[Filter] {
        match self {
            Filter::And(children) | Filter::Or(children) => children,
            other => std::slice::from_ref(other),
        }
    }
}
