use serde::Deserialize;
use serde::Serialize;

/// The kind of a named type-system [`Definition`](crate::ast::Definition).
///
/// The kind fixes which of a definition's list fields are meaningful:
/// `interfaces` (Object), `fields` (Object, Interface, InputObject), `types`
/// (Union), `values` (Enum).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DefinitionKind {
    #[default]
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl DefinitionKind {
    /// The SDL keyword that introduces a definition of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            DefinitionKind::Scalar => "scalar",
            DefinitionKind::Object => "type",
            DefinitionKind::Interface => "interface",
            DefinitionKind::Union => "union",
            DefinitionKind::Enum => "enum",
            DefinitionKind::InputObject => "input",
        }
    }

    /// Maps an SDL keyword (`scalar`, `type`, ...) to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "scalar" => DefinitionKind::Scalar,
            "type" => DefinitionKind::Object,
            "interface" => DefinitionKind::Interface,
            "union" => DefinitionKind::Union,
            "enum" => DefinitionKind::Enum,
            "input" => DefinitionKind::InputObject,
            _ => return None,
        })
    }
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DefinitionKind::Scalar => "SCALAR",
            DefinitionKind::Object => "OBJECT",
            DefinitionKind::Interface => "INTERFACE",
            DefinitionKind::Union => "UNION",
            DefinitionKind::Enum => "ENUM",
            DefinitionKind::InputObject => "INPUT_OBJECT",
        })
    }
}
