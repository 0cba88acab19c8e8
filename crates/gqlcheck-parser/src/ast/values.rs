use crate::Location;
use serde::Deserialize;
use serde::Serialize;

/// An input value literal.
///
/// Numeric literals keep their raw source text so that no precision is lost
/// at parse time.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Variable(String),
    Int(String),
    Float(String),
    String(String),
    BlockString(String),
    Boolean(bool),
    #[default]
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}

/// A `name: value` pair passed to a field or directive.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

/// A directive annotation such as `@include(if: $flag)`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub location: Location,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
