use crate::Schema;
use crate::validator::FieldVisitorRegistry;
use crate::validator::ValidationError;
use crate::validator::rules;
use gqlcheck_parser::ast::QueryDocument;
use std::sync::Arc;
use std::sync::Mutex;

pub(super) const SCHEMA: &str = r#"
    schema { query: Query mutation: Mutation }

    scalar String
    scalar ID
    enum Role { ADMIN USER }

    interface Node { id: ID! }

    type User implements Node {
        id: ID!
        name: String
        role: Role
        friends: [User!]!
        posts: [Post]
    }

    type Post implements Node {
        id: ID!
        title: String
        author: User
    }

    union SearchResult = User | Post

    type Query {
        me: User
        node(id: ID!): Node
        search(text: String): [SearchResult!]
    }

    type Mutation {
        publish(title: String): Post
    }
"#;

pub(super) fn schema() -> Schema {
    Schema::load(SCHEMA).unwrap()
}

pub(super) fn query(source: &str) -> QueryDocument {
    gqlcheck_parser::parse_query(source).unwrap()
}

pub(super) fn builtin_registry() -> FieldVisitorRegistry {
    rules::register_builtin_rules(FieldVisitorRegistry::builder()).build()
}

pub(super) fn validate_with_builtins(schema: &Schema, source: &str) -> Vec<ValidationError> {
    crate::validate(schema, &query(source), &builtin_registry())
}

pub(super) fn messages(errors: &[ValidationError]) -> Vec<&str> {
    errors.iter().map(|err| err.message.as_str()).collect()
}

/// Walks `source` with a single visitor that records every call as
/// `Parent.field: Type`, with `?` standing in for an absent parent or field
/// definition.
pub(super) fn recorded_visits(schema: &Schema, source: &str) -> Vec<String> {
    let visits = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&visits);
    let registry = FieldVisitorRegistry::builder()
        .add_field_visitor("Recorder", move |_ctx, parent, def, field| {
            sink.lock().unwrap().push(format!(
                "{}.{}: {}",
                parent.map_or("?", |parent| parent.name.as_str()),
                field.name,
                def.map_or("?".to_string(), |def| def.ty.to_string()),
            ));
        })
        .build();

    let errors = crate::validate(schema, &query(source), &registry);
    assert!(errors.is_empty());

    let visits = visits.lock().unwrap().clone();
    visits
}
