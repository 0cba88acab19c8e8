use crate::Location;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// A parsed query (executable) document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct QueryDocument {
    pub operations: Vec<OperationDefinition>,
    pub fragments: Vec<FragmentDefinition>,
}

impl QueryDocument {
    /// Looks up a named operation. `None` finds the first anonymous one.
    pub fn operation(&self, name: Option<&str>) -> Option<&OperationDefinition> {
        self.operations.iter().find(|op| op.name.as_deref() == name)
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.iter().find(|frag| frag.name == name)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OperationType {
    #[default]
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "query" => OperationType::Query,
            "mutation" => OperationType::Mutation,
            "subscription" => OperationType::Subscription,
            _ => return None,
        })
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation. A bare `{ ... }` is an anonymous query with no variables or
/// directives.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VariableDefinition {
    pub variable: String,
    pub ty: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub location: Location,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}

/// A single selection within a selection set.
///
/// See
/// [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}

impl Field {
    /// The key this field appears under in a response: its alias if it has
    /// one, its name otherwise.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// `... on Type @directives { ... }`, where `on Type` is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}
