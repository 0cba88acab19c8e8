use crate::Schema;
use gqlcheck_parser::ast::OperationType;

#[test]
fn field_lookup_on_definition() {
    let schema = Schema::load("type User { id: ID! name: String }").unwrap();

    let user = schema.type_def("User").unwrap();
    assert_eq!(user.field("name").map(|f| f.ty.to_string()), Some("String".to_string()));
    assert!(user.field("email").is_none());
}

#[test]
fn root_type_for_each_operation() {
    let schema = Schema::load(concat!(
        "type Q { a: Int }\n",
        "type S { a: Int }\n",
        "schema { query: Q subscription: S }\n",
    )).unwrap();

    let roots: Vec<_> = [
        OperationType::Query,
        OperationType::Mutation,
        OperationType::Subscription,
    ]
        .into_iter()
        .map(|op| schema.root_type(op).map(|def| def.name.as_str()))
        .collect();
    assert_eq!(roots, vec![Some("Q"), None, Some("S")]);
}

#[test]
fn empty_schema() {
    let schema = Schema::load("").unwrap();

    assert!(schema.types().is_empty());
    assert!(schema.directives().is_empty());
    assert!(schema.query_type().is_none());
    assert_eq!(schema, Schema::default());
}

#[test]
fn schema_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}

/// Roots serialize as type names rather than copies of the definitions.
#[test]
fn serializes_to_json() {
    let schema = Schema::load("type Q { a: Int }\nschema { query: Q }").unwrap();

    let json = serde_json::to_value(&schema).unwrap();

    assert_eq!(json["query_type"], "Q");
    assert_eq!(json["mutation_type"], serde_json::Value::Null);
    assert_eq!(json["types"]["Q"]["fields"][0]["name"], "a");
    assert_eq!(json["possible_types"]["Q"][0], "Q");
}
