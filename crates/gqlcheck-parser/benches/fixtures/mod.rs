use std::fmt::Write;

pub const SMALL_SCHEMA: &str = include_str!("small_schema.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");

/// A synthetic schema of `type_count` object types, each with
/// `field_count` fields referencing neighboring types.
pub fn synthetic_schema(type_count: usize, field_count: usize) -> String {
    let mut schema = String::from("type Query { root: Type0 }\n");
    for i in 0..type_count {
        let _ = writeln!(schema, "\"\"\"Type number {i}.\"\"\"\ntype Type{i} {{");
        for j in 0..field_count {
            let target = (i + j + 1) % type_count;
            let _ = writeln!(schema, "  field{j}(arg: Int = {j}): [Type{target}!]");
        }
        schema.push_str("}\n");
    }
    schema
}

/// A query whose selection sets nest `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut query = String::from("query Deep ");
    for _ in 0..depth {
        query.push_str("{ field0 ");
    }
    for _ in 0..depth {
        query.push_str("} ");
    }
    query
}

/// A document with `count` small named operations.
pub fn many_operations(count: usize) -> String {
    let mut doc = String::new();
    for i in 0..count {
        let _ = writeln!(doc, "query Op{i}($v: Int) {{ root {{ field{i}(arg: $v) {{ field0 }} }} }}");
    }
    doc
}
