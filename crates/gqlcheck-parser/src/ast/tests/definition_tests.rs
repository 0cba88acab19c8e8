use crate::ast::Definition;
use crate::ast::DefinitionKind;
use crate::ast::FieldDefinition;

fn definition(kind: DefinitionKind) -> Definition {
    Definition {
        kind,
        name: "T".to_string(),
        fields: vec![
            FieldDefinition {
                name: "a".to_string(),
                ..Default::default()
            },
            FieldDefinition {
                name: "b".to_string(),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

#[test]
fn field_lookup() {
    let def = definition(DefinitionKind::Object);

    assert_eq!(def.field("b").map(|field| field.name.as_str()), Some("b"));
    assert!(def.field("c").is_none());
}

#[test]
fn only_scalars_and_enums_are_leaves() {
    assert!(definition(DefinitionKind::Scalar).is_leaf());
    assert!(definition(DefinitionKind::Enum).is_leaf());
    assert!(!definition(DefinitionKind::Object).is_leaf());
    assert!(!definition(DefinitionKind::Interface).is_leaf());
    assert!(!definition(DefinitionKind::Union).is_leaf());
    assert!(!definition(DefinitionKind::InputObject).is_leaf());
}

#[test]
fn kind_keywords_and_display() {
    let kinds = [
        (DefinitionKind::Scalar, "scalar", "SCALAR"),
        (DefinitionKind::Object, "type", "OBJECT"),
        (DefinitionKind::Interface, "interface", "INTERFACE"),
        (DefinitionKind::Union, "union", "UNION"),
        (DefinitionKind::Enum, "enum", "ENUM"),
        (DefinitionKind::InputObject, "input", "INPUT_OBJECT"),
    ];
    for (kind, keyword, display) in kinds {
        assert_eq!(kind.keyword(), keyword);
        assert_eq!(DefinitionKind::from_keyword(keyword), Some(kind));
        assert_eq!(kind.to_string(), display);
    }
    assert_eq!(DefinitionKind::from_keyword("schema"), None);
}
