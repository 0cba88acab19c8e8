//! Tests for parsing schema (SDL) documents: every definition kind, schema
//! blocks, directive definitions, and extensions.

use crate::Location;
use crate::ast::DefinitionKind;
use crate::ast::DirectiveLocation;
use crate::ast::OperationType;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::tests::utils::parse_schema_ok;
use crate::tests::utils::single_definition;

// =============================================================================
// Type definitions
// =============================================================================

#[test]
fn object_type_with_one_field() {
    let def = single_definition("type Query { hello: String }");

    assert_eq!(def.kind, DefinitionKind::Object);
    assert_eq!(def.name, "Query");
    assert_eq!(def.location, Location::new(1, 1));
    assert_eq!(def.fields.len(), 1);
    assert_eq!(def.fields[0].name, "hello");
    assert_eq!(def.fields[0].ty, TypeAnnotation::named("String"));
    assert_eq!(def.fields[0].location, Location::new(1, 14));
}

#[test]
fn scalar_with_directive() {
    let def = single_definition("scalar DateTime @specifiedBy(url: \"https://example.com\")");

    assert_eq!(def.kind, DefinitionKind::Scalar);
    assert_eq!(def.name, "DateTime");
    assert_eq!(def.directives.len(), 1);
    assert_eq!(def.directives[0].name, "specifiedBy");
    assert_eq!(
        def.directives[0].argument("url").map(|arg| &arg.value),
        Some(&Value::String("https://example.com".to_string())),
    );
}

/// A leading `&` before the first interface is optional.
#[test]
fn object_implements_interfaces() {
    let with_leading = single_definition("type A implements & B & C { x: Int }");
    let without_leading = single_definition("type A implements B & C { x: Int }");

    assert_eq!(with_leading.interfaces, vec!["B", "C"]);
    assert_eq!(without_leading.interfaces, vec!["B", "C"]);
}

#[test]
fn interface_type() {
    let def = single_definition("interface Node @key { id: ID! }");

    assert_eq!(def.kind, DefinitionKind::Interface);
    assert_eq!(def.directives[0].name, "key");
    assert_eq!(
        def.fields[0].ty,
        TypeAnnotation::NonNull(Box::new(TypeAnnotation::named("ID"))),
    );
}

/// A leading `|` before the first union member is optional.
#[test]
fn union_members() {
    let def = single_definition("union SearchResult = | Photo | Person");

    assert_eq!(def.kind, DefinitionKind::Union);
    assert_eq!(def.types, vec!["Photo", "Person"]);
}

#[test]
fn union_without_members() {
    let def = single_definition("union Empty @tag");

    assert!(def.types.is_empty());
    assert_eq!(def.directives[0].name, "tag");
}

#[test]
fn enum_values() {
    let def = single_definition(
        r#"enum Color {
            "the color red"
            RED
            GREEN @deprecated(reason: "no")
            BLUE
        }"#,
    );

    assert_eq!(def.kind, DefinitionKind::Enum);
    let names: Vec<_> = def.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(def.values[0].description.as_deref(), Some("the color red"));
    assert_eq!(def.values[1].directives[0].name, "deprecated");
}

#[test]
fn input_object_with_defaults() {
    let def = single_definition(r#"input Filter { limit: Int = 10, tags: [String!]! = ["a"] }"#);

    assert_eq!(def.kind, DefinitionKind::InputObject);
    assert_eq!(def.fields[0].default_value, Some(Value::Int("10".to_string())));
    assert_eq!(def.fields[1].ty.to_string(), "[String!]!");
    assert_eq!(
        def.fields[1].default_value,
        Some(Value::List(vec![Value::String("a".to_string())])),
    );
}

#[test]
fn field_arguments_with_defaults_and_directives() {
    let def = single_definition(
        r#"type Query {
            users(first: Int = 5 @deprecated, "the cursor" after: String): [User]
        }"#,
    );

    let field = &def.fields[0];
    assert_eq!(field.name, "users");
    assert_eq!(field.ty.to_string(), "[User]");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[0].name, "first");
    assert_eq!(field.arguments[0].default_value, Some(Value::Int("5".to_string())));
    assert_eq!(field.arguments[0].directives[0].name, "deprecated");
    assert_eq!(field.arguments[1].description.as_deref(), Some("the cursor"));
    assert_eq!(field.arguments[1].default_value, None);
}

#[test]
fn nested_type_annotations() {
    let def = single_definition("type Q { matrix: [[Float!]]! }");

    let ty = &def.fields[0].ty;
    assert_eq!(ty.to_string(), "[[Float!]]!");
    assert_eq!(ty.name(), "Float");
    assert!(ty.is_non_null());
}

// =============================================================================
// Descriptions
// =============================================================================

#[test]
fn descriptions_are_cooked() {
    let doc = parse_schema_ok(
        r#"
        "A plain \"quoted\" description"
        scalar A

        """
            A block description
              with indentation
        """
        type B {
            "field\tdoc"
            f: Int
        }
        "#,
    );

    assert_eq!(
        doc.definitions[0].description.as_deref(),
        Some("A plain \"quoted\" description"),
    );
    assert_eq!(
        doc.definitions[1].description.as_deref(),
        Some("A block description\n  with indentation"),
    );
    assert_eq!(doc.definitions[1].fields[0].description.as_deref(), Some("field\tdoc"));
}

#[test]
fn description_on_schema_and_directive() {
    let doc = parse_schema_ok(
        r#"
        "the schema"
        schema { query: Q }
        "a directive"
        directive @d on FIELD
        "#,
    );

    assert_eq!(doc.schema[0].description.as_deref(), Some("the schema"));
    assert_eq!(doc.directives[0].description.as_deref(), Some("a directive"));
}

// =============================================================================
// Schema blocks and directive definitions
// =============================================================================

#[test]
fn schema_definition_operation_types() {
    let doc = parse_schema_ok("schema @live { query: Q mutation: M subscription: S }");

    assert_eq!(doc.schema.len(), 1);
    let schema = &doc.schema[0];
    assert_eq!(schema.directives[0].name, "live");
    let ops: Vec<_> = schema
        .operation_types
        .iter()
        .map(|op| (op.operation, op.type_name.as_str()))
        .collect();
    assert_eq!(
        ops,
        vec![
            (OperationType::Query, "Q"),
            (OperationType::Mutation, "M"),
            (OperationType::Subscription, "S"),
        ],
    );
}

#[test]
fn directive_definition() {
    let doc = parse_schema_ok(
        "directive @cache(maxAge: Int = 60) on | FIELD_DEFINITION | OBJECT | INTERFACE",
    );

    let def = &doc.directives[0];
    assert_eq!(def.name, "cache");
    assert_eq!(def.arguments[0].name, "maxAge");
    assert_eq!(def.arguments[0].default_value, Some(Value::Int("60".to_string())));
    assert_eq!(
        def.locations,
        vec![
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::Object,
            DirectiveLocation::Interface,
        ],
    );
}

/// Every location name in the fixed set parses.
#[test]
fn directive_definition_accepts_every_known_location() {
    let names: Vec<_> = DirectiveLocation::ALL.iter().map(|loc| loc.as_str()).collect();
    let source = format!("directive @all on {}", names.join(" | "));

    let doc = parse_schema_ok(&source);

    assert_eq!(doc.directives[0].locations, DirectiveLocation::ALL.to_vec());
}

// =============================================================================
// Extensions
// =============================================================================

#[test]
fn type_extensions_are_bucketed_separately() {
    let doc = parse_schema_ok(
        r#"
        type Query { a: Int }
        extend type Query { b: Int }
        extend scalar Date @tag
        extend union U = A
        extend enum E { X }
        extend input I { y: Int }
        extend interface N @k
        "#,
    );

    assert_eq!(doc.definitions.len(), 1);
    let kinds: Vec<_> = doc.extensions.iter().map(|ext| (ext.kind, ext.name.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (DefinitionKind::Object, "Query"),
            (DefinitionKind::Scalar, "Date"),
            (DefinitionKind::Union, "U"),
            (DefinitionKind::Enum, "E"),
            (DefinitionKind::InputObject, "I"),
            (DefinitionKind::Interface, "N"),
        ],
    );
    assert_eq!(doc.extensions[0].fields[0].name, "b");
    assert_eq!(doc.extensions[0].location, Location::new(3, 9));
}

#[test]
fn object_extension_with_only_interfaces() {
    let doc = parse_schema_ok("extend type Query implements Node");

    assert_eq!(doc.extensions[0].interfaces, vec!["Node"]);
}

#[test]
fn schema_extension() {
    let doc = parse_schema_ok("extend schema @tag { subscription: S }");

    assert!(doc.schema.is_empty());
    assert_eq!(doc.schema_extensions.len(), 1);
    assert_eq!(doc.schema_extensions[0].directives[0].name, "tag");
    assert_eq!(
        doc.schema_extensions[0].operation_types[0].operation,
        OperationType::Subscription,
    );
}

// =============================================================================
// Whole documents
// =============================================================================

/// Definitions keep their source order within each bucket.
#[test]
fn buckets_preserve_source_order() {
    let doc = parse_schema_ok(
        r#"
        type C { x: Int }
        directive @b on FIELD
        scalar A
        directive @a on FIELD
        enum B { X }
        "#,
    );

    let types: Vec<_> = doc.definitions.iter().map(|def| def.name.as_str()).collect();
    let directives: Vec<_> = doc.directives.iter().map(|def| def.name.as_str()).collect();
    assert_eq!(types, vec!["C", "A", "B"]);
    assert_eq!(directives, vec!["b", "a"]);
}

#[test]
fn empty_and_comment_only_documents() {
    assert_eq!(parse_schema_ok(""), Default::default());
    assert_eq!(parse_schema_ok("  # just a comment\n,,,\n"), Default::default());
}

#[test]
fn merge_appends_buckets() {
    let mut left = parse_schema_ok("type A { x: Int } directive @a on FIELD");
    let right = parse_schema_ok("type B { y: Int } extend type A { z: Int } schema { query: A }");

    left.merge(right);

    let types: Vec<_> = left.definitions.iter().map(|def| def.name.as_str()).collect();
    assert_eq!(types, vec!["A", "B"]);
    assert_eq!(left.extensions.len(), 1);
    assert_eq!(left.schema.len(), 1);
    assert_eq!(left.directives.len(), 1);
}

/// Keywords are only keywords in context: they are valid type and field
/// names.
#[test]
fn keywords_as_names() {
    let def = single_definition("type type { query: on, fragment: schema }");

    assert_eq!(def.name, "type");
    assert_eq!(def.fields[0].name, "query");
    assert_eq!(def.fields[0].ty, TypeAnnotation::named("on"));
    assert_eq!(def.fields[1].name, "fragment");
}
